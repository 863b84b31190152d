use std::fmt;
use std::str::FromStr;

use crate::error::DictionaryError;

/// Languages the dictionary API serves. The set is closed; looking up a
/// word in anything else fails before any network activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    Japanese,
    Russian,
    German,
    Italian,
    Korean,
    BrazilianPortuguese,
    Arabic,
    Turkish,
}

impl Language {
    /// Locale code the API expects in the entries URL.
    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Japanese => "ja",
            Language::Russian => "ru",
            Language::German => "de",
            Language::Italian => "it",
            Language::Korean => "ko",
            Language::BrazilianPortuguese => "pt-BR",
            Language::Arabic => "ar",
            Language::Turkish => "tr",
        }
    }

    /// Resolve a locale code into a registry member.
    pub fn from_code(code: &str) -> Result<Self, DictionaryError> {
        Self::all()
            .iter()
            .copied()
            .find(|language| language.code() == code)
            .ok_or_else(|| DictionaryError::UnsupportedLanguage(code.to_string()))
    }

    pub const fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Spanish,
            Language::French,
            Language::Japanese,
            Language::Russian,
            Language::German,
            Language::Italian,
            Language::Korean,
            Language::BrazilianPortuguese,
            Language::Arabic,
            Language::Turkish,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DictionaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
