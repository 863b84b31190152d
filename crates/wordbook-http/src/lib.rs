use async_trait::async_trait;
use serde_json::Value;

use wordbook::error::DictionaryError;
use wordbook::{DictionaryClient, Language};

#[cfg(feature = "blocking")]
pub mod blocking;
#[cfg(feature = "blocking")]
pub use blocking::BlockingClient;

/// Dictionary client backed by `reqwest`. Cloning shares the underlying
/// connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
    language: Language,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose lookups default to `language`.
    pub fn with_language(language: Language) -> Self {
        Self {
            client: reqwest::Client::new(),
            language,
        }
    }

    /// Build on top of a caller-configured `reqwest::Client` (timeouts,
    /// proxies, connection pooling stay under the caller's control).
    pub fn with_client(client: reqwest::Client, language: Language) -> Self {
        Self { client, language }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl DictionaryClient for HttpClient {
    fn default_language(&self) -> Language {
        self.language
    }

    async fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError> {
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.map_err(transport_error)?;
        Ok((status, body))
    }
}

pub(crate) fn transport_error(error: reqwest::Error) -> DictionaryError {
    DictionaryError::Transport(Box::new(error))
}
