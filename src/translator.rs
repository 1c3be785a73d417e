use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Words are translated from Malayalam into English before the similarity
/// heuristics run over them.
pub const SOURCE_LANG: &str = "ml";
pub const TARGET_LANG: &str = "en";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(String),
    #[error("translation service returned status {0}")]
    Status(u16),
    #[error("translation response malformed: {0}")]
    Payload(String),
}

/// External translation collaborator. A failed call is recoverable: the
/// similarity search skips the affected candidate (or the whole translation
/// phase) and carries on. Tests inject an in-process fake.
pub trait Translate {
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-compatible endpoint. One instance per server
/// worker; `awc` clients are not shared across threads.
pub struct HttpTranslator {
    client: awc::Client,
    url: String,
}

impl HttpTranslator {
    pub fn new(url: String) -> Self {
        let client = awc::Client::builder().timeout(REQUEST_TIMEOUT).finish();
        Self { client, url }
    }
}

impl Translate for HttpTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let mut response = self
            .client
            .post(&self.url)
            .send_json(&TranslateRequest {
                q: text,
                source: SOURCE_LANG,
                target: TARGET_LANG,
            })
            .await
            .map_err(|err| TranslateError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslateError::Status(response.status().as_u16()));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|err| TranslateError::Payload(err.to_string()))?;
        Ok(body.translated_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_payload_shape() {
        let body: TranslateResponse =
            serde_json::from_str(r#"{"translatedText": "he"}"#).unwrap();
        assert_eq!(body.translated_text, "he");
    }

    #[test]
    fn request_payload_shape() {
        let payload = serde_json::to_value(TranslateRequest {
            q: "അവൻ",
            source: SOURCE_LANG,
            target: TARGET_LANG,
        })
        .unwrap();
        assert_eq!(payload["q"], "അവൻ");
        assert_eq!(payload["source"], "ml");
        assert_eq!(payload["target"], "en");
    }
}
