use serde_json::Value;

use wordbook::error::DictionaryError;
use wordbook::{BlockingDictionaryClient, Language};

use crate::transport_error;

/// Dictionary client that blocks the calling thread, backed by
/// `reqwest::blocking`.
#[derive(Debug, Clone, Default)]
pub struct BlockingClient {
    client: reqwest::blocking::Client,
    language: Language,
}

impl BlockingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose lookups default to `language`.
    pub fn with_language(language: Language) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            language,
        }
    }

    /// Build on top of a caller-configured `reqwest::blocking::Client`.
    pub fn with_client(client: reqwest::blocking::Client, language: Language) -> Self {
        Self { client, language }
    }

    pub fn client(&self) -> &reqwest::blocking::Client {
        &self.client
    }
}

impl BlockingDictionaryClient for BlockingClient {
    fn default_language(&self) -> Language {
        self.language
    }

    fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError> {
        let response = self.client.get(url).send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().map_err(transport_error)?;
        Ok((status, body))
    }
}
