use url::Url;

use crate::error::DictionaryError;
use crate::language::Language;

// pattern:
// https://api.dictionaryapi.dev/api/v2/entries/<language_code>/<word>
const API_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries";

/// Build the entries URL for a word, percent-encoding it for path
/// inclusion. Returns the URL together with the language actually used,
/// falling back to the default when none is given.
pub fn entry_url(
    word: &str,
    language: Option<Language>,
) -> Result<(String, Language), DictionaryError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(DictionaryError::EmptyWord);
    }
    if word.split_whitespace().nth(1).is_some() {
        tracing::warn!("searched word {word:?} contains more than one token, lookup will likely fail");
    }

    let language = language.unwrap_or_default();

    let mut url = Url::parse(API_ENDPOINT).expect("API endpoint is a valid base URL");
    url.path_segments_mut()
        .expect("API endpoint URL has a path")
        .push(language.code())
        .push(word);

    let url = String::from(url);
    tracing::debug!("generated url {url:?} for word {word:?} in language {language}");

    Ok((url, language))
}
