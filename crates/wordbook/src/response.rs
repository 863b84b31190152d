use serde_json::Value;

use crate::error::DictionaryError;
use crate::types::ErrorBody;

const GENERIC_ERROR_MESSAGE: &str = "unexpected API error";

/// Interpret a `(status, body)` pair from the transport. Success passes
/// the body through unchanged; anything else becomes a classified error
/// with a message lifted from the error body when present.
pub fn analyze(url: &str, status: u16, body: Value) -> Result<Value, DictionaryError> {
    if (200..300).contains(&status) {
        tracing::debug!("response is successful [code={status}] from url: {url}");
        return Ok(body);
    }

    let message = extract_message(&body);
    tracing::warn!("response is not successful [code={status}] from url: {url}");

    if status == 404 {
        return Err(DictionaryError::WordNotFound {
            url: url.to_string(),
            message,
        });
    }

    Err(DictionaryError::Api {
        status,
        url: url.to_string(),
        message,
    })
}

/// Pull a human-readable message out of an error body: `message` first,
/// `title` as fallback, a generic string when the body carries neither.
/// A trailing `resolution` hint is appended when the API offers one.
fn extract_message(body: &Value) -> String {
    let body: ErrorBody = serde_json::from_value(body.clone()).unwrap_or_default();

    let mut message = body
        .message
        .or(body.title)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

    if let Some(resolution) = body.resolution.filter(|resolution| !resolution.is_empty()) {
        message.push_str(" (");
        message.push_str(&resolution);
        message.push(')');
    }

    message
}
