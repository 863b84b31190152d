use serde::Deserialize;
use serde_json::Value;

use crate::error::DictionaryError;
use crate::types::{Meaning, Phonetic, Word};

/// One top-level entry of a successful response. The API sometimes
/// splits a single word over several of these.
#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
    #[serde(default)]
    phonetics: Vec<Phonetic>,
    #[serde(default)]
    meanings: Vec<Meaning>,
}

/// Read-only handle over one parsed API response.
///
/// Wraps the merged [`Word`] and offers shortcut queries over it; for
/// full detail navigate the word graph directly.
#[derive(Debug, Clone)]
pub struct DictionaryParser {
    word: Word,
}

impl DictionaryParser {
    /// Parse a decoded success body (a sequence of entries) into one
    /// merged [`Word`].
    pub fn from_response(response: Value) -> Result<Self, DictionaryError> {
        let entries: Vec<Entry> = serde_json::from_value(response)
            .map_err(|error| DictionaryError::Parsing(error.to_string()))?;

        let mut entries = entries.into_iter();
        let first = entries.next().ok_or_else(|| {
            DictionaryError::Parsing("response contains no entries".to_string())
        })?;

        let mut word = Word {
            word: first.word,
            phonetics: Vec::new(),
            meanings: first.meanings,
        };
        merge_phonetics(&mut word.phonetics, first.phonetics);

        for entry in entries {
            merge_phonetics(&mut word.phonetics, entry.phonetics);
            word.meanings.extend(entry.meanings);
        }

        Ok(Self { word })
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn into_word(self) -> Word {
        self.word
    }

    pub fn phonetics(&self) -> &[Phonetic] {
        &self.word.phonetics
    }

    pub fn meanings(&self) -> &[Meaning] {
        &self.word.meanings
    }

    /// First transcription, if the response carried any.
    pub fn transcription(&self) -> Option<&str> {
        self.transcriptions().into_iter().next()
    }

    pub fn transcriptions(&self) -> Vec<&str> {
        self.word
            .phonetics
            .iter()
            .filter_map(|phonetic| phonetic.text.as_deref())
            .collect()
    }

    /// First pronunciation audio link, if the response carried any.
    pub fn audio_link(&self) -> Option<&str> {
        self.word
            .phonetics
            .iter()
            .find_map(|phonetic| phonetic.audio.as_deref())
    }

    pub fn parts_of_speech(&self) -> Vec<&str> {
        self.word
            .meanings
            .iter()
            .map(|meaning| meaning.part_of_speech.as_str())
            .collect()
    }

    pub fn definitions(&self) -> Vec<&str> {
        self.word
            .meanings
            .iter()
            .flat_map(|meaning| &meaning.definitions)
            .map(|definition| definition.definition.as_str())
            .collect()
    }

    pub fn examples(&self) -> Vec<&str> {
        self.word
            .meanings
            .iter()
            .flat_map(|meaning| &meaning.definitions)
            .filter_map(|definition| definition.example.as_deref())
            .collect()
    }

    /// All synonyms over meanings and their definitions, deduplicated,
    /// in order of first appearance.
    pub fn synonyms(&self) -> Vec<&str> {
        let mut synonyms: Vec<&str> = Vec::new();
        let meaning_level = self.word.meanings.iter().flat_map(|meaning| &meaning.synonyms);
        let definition_level = self
            .word
            .meanings
            .iter()
            .flat_map(|meaning| &meaning.definitions)
            .flat_map(|definition| &definition.synonyms);

        for synonym in meaning_level.chain(definition_level) {
            if !synonyms.contains(&synonym.as_str()) {
                synonyms.push(synonym);
            }
        }

        synonyms
    }
}

/// Append phonetics in order of first appearance, dropping exact
/// duplicates and entries that carry neither text nor audio.
fn merge_phonetics(merged: &mut Vec<Phonetic>, incoming: Vec<Phonetic>) {
    for phonetic in incoming {
        if phonetic.is_empty() || merged.contains(&phonetic) {
            continue;
        }
        merged.push(phonetic);
    }
}
