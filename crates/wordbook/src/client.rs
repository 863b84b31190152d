use async_trait::async_trait;
use serde_json::Value;

use crate::error::DictionaryError;
use crate::language::Language;
use crate::parser::DictionaryParser;
use crate::response;
use crate::types::Word;
use crate::urls;

/// Dictionary lookup interface for suspending transports.
///
/// Implementors supply only [`perform_request`](Self::perform_request);
/// the lookup pipeline (URL generation, response analysis, parsing)
/// lives in the provided methods and is shared by every transport.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Language used when a lookup does not name one explicitly.
    fn default_language(&self) -> Language {
        Language::default()
    }

    /// Transport primitive: perform an HTTP GET for `url` and return the
    /// status code together with the body decoded as JSON. Error bodies
    /// are JSON too and must be decoded, not treated as opaque failures.
    async fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError>;

    /// Fetch the raw decoded response body for a word.
    async fn fetch_json(
        &self,
        word: &str,
        language: Option<Language>,
    ) -> Result<Value, DictionaryError> {
        let language = language.unwrap_or_else(|| self.default_language());
        let (url, language) = urls::entry_url(word, Some(language))?;

        tracing::debug!("requesting definitions for word {word:?} in language {language} from url: {url}");

        let (status, body) = self.perform_request(&url).await?;
        response::analyze(&url, status, body)
    }

    /// Fetch a [`DictionaryParser`] wrapping the parsed response.
    async fn fetch_parser(
        &self,
        word: &str,
        language: Option<Language>,
    ) -> Result<DictionaryParser, DictionaryError> {
        let json = self.fetch_json(word, language).await?;
        DictionaryParser::from_response(json)
    }

    /// Fetch the parsed [`Word`]. Shortcut for
    /// `fetch_parser(..)` followed by taking its word.
    async fn fetch_word(
        &self,
        word: &str,
        language: Option<Language>,
    ) -> Result<Word, DictionaryError> {
        Ok(self.fetch_parser(word, language).await?.into_word())
    }
}

/// Dictionary lookup interface for transports that block the calling
/// thread. Same pipeline as [`DictionaryClient`], synchronous signatures.
pub trait BlockingDictionaryClient {
    fn default_language(&self) -> Language {
        Language::default()
    }

    /// Transport primitive, blocking flavor. See
    /// [`DictionaryClient::perform_request`].
    fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError>;

    fn fetch_json(&self, word: &str, language: Option<Language>) -> Result<Value, DictionaryError> {
        let language = language.unwrap_or_else(|| self.default_language());
        let (url, language) = urls::entry_url(word, Some(language))?;

        tracing::debug!("requesting definitions for word {word:?} in language {language} from url: {url}");

        let (status, body) = self.perform_request(&url)?;
        response::analyze(&url, status, body)
    }

    fn fetch_parser(
        &self,
        word: &str,
        language: Option<Language>,
    ) -> Result<DictionaryParser, DictionaryError> {
        let json = self.fetch_json(word, language)?;
        DictionaryParser::from_response(json)
    }

    fn fetch_word(&self, word: &str, language: Option<Language>) -> Result<Word, DictionaryError> {
        Ok(self.fetch_parser(word, language)?.into_word())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    /// Suspending transport serving canned responses keyed by URL.
    struct MockClient {
        responses: HashMap<String, (u16, Value)>,
        language: Language,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                language: Language::default(),
            }
        }

        fn respond(mut self, url: &str, status: u16, body: Value) -> Self {
            self.responses.insert(url.to_string(), (status, body));
            self
        }

        fn with_definition(self, word: &str, language: Language, definition: &str) -> Self {
            let url = format!(
                "https://api.dictionaryapi.dev/api/v2/entries/{}/{word}",
                language.code()
            );
            let body = json!([{
                "word": word,
                "phonetics": [],
                "meanings": [{
                    "partOfSpeech": "noun",
                    "definitions": [{"definition": definition}]
                }]
            }]);
            self.respond(&url, 200, body)
        }
    }

    #[async_trait]
    impl DictionaryClient for MockClient {
        fn default_language(&self) -> Language {
            self.language
        }

        async fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError> {
            // suspend once so concurrent lookups interleave
            tokio::task::yield_now().await;
            match self.responses.get(url) {
                Some((status, body)) => Ok((*status, body.clone())),
                None => Err(DictionaryError::Transport(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("no canned response for {url}"),
                )))),
            }
        }
    }

    #[tokio::test]
    async fn test_fetch_word_runs_the_whole_pipeline() {
        let client = MockClient::new().with_definition("hello", Language::English, "a greeting");

        let word = client.fetch_word("hello", None).await.unwrap();
        assert_eq!(word.word, "hello");
        assert_eq!(word.meanings[0].definitions[0].definition, "a greeting");
    }

    #[tokio::test]
    async fn test_explicit_language_overrides_client_default() {
        let client = MockClient::new().with_definition("hola", Language::Spanish, "saludo");

        let word = client
            .fetch_word("hola", Some(Language::Spanish))
            .await
            .unwrap();
        assert_eq!(word.word, "hola");
    }

    #[tokio::test]
    async fn test_fetch_json_returns_raw_body() {
        let client = MockClient::new().with_definition("hello", Language::English, "a greeting");

        let json = client.fetch_json("hello", None).await.unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["word"], "hello");
    }

    #[tokio::test]
    async fn test_fetch_parser_exposes_the_word() {
        let client = MockClient::new().with_definition("hello", Language::English, "a greeting");

        let parser = client.fetch_parser("hello", None).await.unwrap();
        assert_eq!(parser.word().word, "hello");
        assert_eq!(parser.definitions(), ["a greeting"]);
    }

    #[tokio::test]
    async fn test_404_surfaces_as_word_not_found() {
        let client = MockClient::new().respond(
            "https://api.dictionaryapi.dev/api/v2/entries/en/zzzz",
            404,
            json!({"title": "No Definitions Found", "message": "No Definitions Found"}),
        );

        let error = client.fetch_word("zzzz", None).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_server_error_surfaces_with_status() {
        let client = MockClient::new().respond(
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello",
            500,
            json!({"message": "internal error"}),
        );

        let error = client.fetch_word("hello", None).await.unwrap_err();
        assert_eq!(error.status(), Some(500));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_parsing_error() {
        let client = MockClient::new().respond(
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello",
            200,
            json!([]),
        );

        let error = client.fetch_word("hello", None).await.unwrap_err();
        assert!(matches!(error, DictionaryError::Parsing(_)));
    }

    #[tokio::test]
    async fn test_empty_word_fails_before_the_transport_runs() {
        let client = MockClient::new();
        let error = client.fetch_word("   ", None).await.unwrap_err();
        assert!(matches!(error, DictionaryError::EmptyWord));
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through_unchanged() {
        let client = MockClient::new();
        let error = client.fetch_word("offline", None).await.unwrap_err();
        assert!(matches!(error, DictionaryError::Transport(_)));
    }

    #[tokio::test]
    async fn test_concurrent_lookups_do_not_cross_contaminate() {
        let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];

        let mut client = MockClient::new();
        for word in words {
            client = client.with_definition(word, Language::English, &format!("meaning of {word}"));
        }
        let client = Arc::new(client);

        let handles: Vec<_> = words
            .iter()
            .map(|&word| {
                let client = Arc::clone(&client);
                tokio::spawn(async move { client.fetch_word(word, None).await })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(words) {
            let word = handle.await.unwrap().unwrap();
            assert_eq!(word.word, expected);
            assert_eq!(
                word.meanings[0].definitions[0].definition,
                format!("meaning of {expected}")
            );
        }
    }

    /// Blocking transport over the same canned-response table.
    struct BlockingMockClient {
        responses: HashMap<String, (u16, Value)>,
    }

    impl BlockingDictionaryClient for BlockingMockClient {
        fn perform_request(&self, url: &str) -> Result<(u16, Value), DictionaryError> {
            match self.responses.get(url) {
                Some((status, body)) => Ok((*status, body.clone())),
                None => Err(DictionaryError::Transport(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    format!("no canned response for {url}"),
                )))),
            }
        }
    }

    #[test]
    fn test_blocking_client_shares_the_pipeline() {
        let url = "https://api.dictionaryapi.dev/api/v2/entries/en/hello";
        let body = json!([{
            "word": "hello",
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{"definition": "used as a greeting"}]
            }]
        }]);

        let client = BlockingMockClient {
            responses: HashMap::from([(url.to_string(), (200u16, body))]),
        };

        let word = client.fetch_word("hello", None).unwrap();
        assert_eq!(word.word, "hello");

        let error = client.fetch_word("missing", None).unwrap_err();
        assert!(matches!(error, DictionaryError::Transport(_)));
    }
}
