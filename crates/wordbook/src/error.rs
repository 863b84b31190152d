use std::error::Error as StdError;

/// Failure raised by the transport collaborator, carried through unchanged.
pub type TransportError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("unsupported language code: {0:?}")]
    UnsupportedLanguage(String),

    #[error("searched word must not be empty")]
    EmptyWord,

    #[error("no definitions found for url {url}: {message}")]
    WordNotFound { url: String, message: String },

    #[error("API error [code={status}] from url {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    #[error("malformed API response: {0}")]
    Parsing(String),

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),
}

impl DictionaryError {
    /// True when the API affirmatively reported that the word has no entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::WordNotFound { .. })
    }

    /// HTTP status code for API-level failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::WordNotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
