use serde::Deserialize;

/// Everything the API knows about one searched word, merged across the
/// entries of a successful response. Built once by the parser and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
}

/// A pronunciation variant: transcription text and/or an audio link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Phonetic {
    /// A phonetic carrying neither transcription nor audio says nothing
    /// and is dropped during parsing.
    pub(crate) fn is_empty(&self) -> bool {
        let text = self.text.as_deref().unwrap_or("");
        let audio = self.audio.as_deref().unwrap_or("");
        text.is_empty() && audio.is_empty()
    }
}

/// One part-of-speech grouping of definitions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Body shape the API sends alongside non-success status codes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}
