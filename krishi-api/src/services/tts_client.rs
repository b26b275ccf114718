//! Google Translate TTS client
//!
//! Synthesizes advisory text to MP3 audio through the public
//! translate.google.com endpoint, the same one the web UI uses.

use bytes::Bytes;
use krishi_common::{Error, Lang};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Google Translate TTS endpoint
const TRANSLATE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// Default timeout for TTS requests
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The endpoint rejects single requests beyond this many characters
const MAX_TTS_CHARS: usize = 200;

/// Google Translate TTS client
#[derive(Clone)]
pub struct TtsClient {
    http_client: Client,
}

impl TtsClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Synthesize `text` in `lang`, returning MP3 bytes.
    pub async fn synthesize(&self, text: &str, lang: Lang) -> Result<Bytes, Error> {
        if text.is_empty() {
            return Err(Error::InvalidInput("TTS text is empty".to_string()));
        }
        let char_count = text.chars().count();
        if char_count > MAX_TTS_CHARS {
            return Err(Error::InvalidInput(format!(
                "TTS text too long: {} chars (max {})",
                char_count, MAX_TTS_CHARS
            )));
        }

        debug!(lang = lang.as_code(), chars = char_count, "Requesting TTS audio");

        let textlen = char_count.to_string();
        let response = self
            .http_client
            .get(TRANSLATE_TTS_URL)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang.as_code()),
                ("q", text),
                ("total", "1"),
                ("idx", "0"),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("TTS request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "TTS endpoint returned {}",
                response.status()
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to read TTS audio: {}", e)))
    }
}

impl Default for TtsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let client = TtsClient::new();
        let err = client.synthesize("", Lang::En).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_overlong_text_rejected() {
        let client = TtsClient::new();
        let text = "a".repeat(MAX_TTS_CHARS + 1);
        let err = client.synthesize(&text, Lang::Hi).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_char_count_is_chars_not_bytes() {
        // Devanagari text is multi-byte; the limit counts characters
        let text = "र".repeat(MAX_TTS_CHARS);
        assert!(text.len() > MAX_TTS_CHARS);
        assert_eq!(text.chars().count(), MAX_TTS_CHARS);
    }
}
