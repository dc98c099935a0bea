//! # polyglot-translate
//!
//! Client for the remote translation API.
//!
//! `GET /translate?sl=&dl=&text=` returns `{"destination-text": "..."}`;
//! `GET /languages` returns `{code: displayName, ...}`. The client adds
//! timeouts, a bounded retry policy, and a fixed fallback language list for
//! when the remote list cannot be fetched.

use async_trait::async_trait;
use polyglot_core::{config::TranslateConfig, error::PolyglotError, traits::Translator};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Text longer than this is truncated before sending.
pub const MAX_TEXT_LENGTH: usize = 4000;

/// Total attempts per translation request.
const RETRY_COUNT: u32 = 3;

/// Translation API client with a process-lifetime language cache.
pub struct TranslateClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    /// `None` = not fetched yet. The fallback list is never cached, so a
    /// later call can still attempt the real fetch.
    languages: Mutex<Option<BTreeMap<String, String>>>,
}

impl TranslateClient {
    /// Create a new client from config.
    pub fn new(config: &TranslateConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            languages: Mutex::new(None),
        }
    }

    async fn fetch_languages(&self) -> Result<BTreeMap<String, String>, PolyglotError> {
        let url = format!("{}/languages", self.base_url);
        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PolyglotError::Translate(format!("languages fetch failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(PolyglotError::Translate(format!(
                "languages fetch returned HTTP {}",
                resp.status()
            )));
        }

        resp.json::<BTreeMap<String, String>>()
            .await
            .map_err(|e| PolyglotError::Translate(format!("languages parse failed: {e}")))
    }
}

#[async_trait]
impl Translator for TranslateClient {
    /// Translate `text` with up to three attempts.
    ///
    /// Retry matrix: HTTP 429 backs off exponentially (1s, 2s, 4s); other
    /// non-200 statuses and transport errors retry after a flat 1s except on
    /// the final attempt; HTTP 400 and malformed/empty payloads are terminal.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, PolyglotError> {
        if text.trim().is_empty() {
            return Err(PolyglotError::Translate("empty text".to_string()));
        }
        if source == target {
            info!("source and target languages match, returning input unchanged");
            return Ok(text.to_string());
        }

        let text = if text.chars().count() > MAX_TEXT_LENGTH {
            warn!("text truncated to {MAX_TEXT_LENGTH} characters");
            text.chars().take(MAX_TEXT_LENGTH).collect::<String>()
        } else {
            text.to_string()
        };

        let url = format!("{}/translate", self.base_url);
        let mut last_error = String::new();

        for attempt in 0..RETRY_COUNT {
            let resp = match self
                .client
                .get(&url)
                .query(&[("sl", source), ("dl", target), ("text", &text)])
                .timeout(self.timeout)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = format!("request failed: {e}");
                    warn!(
                        "translate attempt {}/{RETRY_COUNT} failed: {e}",
                        attempt + 1
                    );
                    if attempt + 1 < RETRY_COUNT {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                    break;
                }
            };

            let status = resp.status();
            if status.as_u16() == 200 {
                let body: serde_json::Value = resp.json().await.map_err(|e| {
                    PolyglotError::Translate(format!("response parse failed: {e}"))
                })?;
                // A malformed or empty payload will not improve on retry.
                return match body.get("destination-text").and_then(|v| v.as_str()) {
                    Some(translated) if !translated.trim().is_empty() => {
                        info!("translated {source} -> {target}");
                        Ok(translated.trim().to_string())
                    }
                    Some(_) => {
                        Err(PolyglotError::Translate("API returned empty translation".into()))
                    }
                    None => Err(PolyglotError::Translate(format!(
                        "unexpected response shape: {body}"
                    ))),
                };
            }

            if status.as_u16() == 400 {
                return Err(PolyglotError::Translate(
                    "malformed request (HTTP 400)".to_string(),
                ));
            }

            if status.as_u16() == 429 {
                let backoff = Duration::from_secs(1 << attempt);
                warn!("rate limited by API, backing off {backoff:?}");
                last_error = "rate limited (HTTP 429)".to_string();
                tokio::time::sleep(backoff).await;
                continue;
            }

            last_error = format!("HTTP {status}");
            warn!(
                "translate attempt {}/{RETRY_COUNT} returned {status}",
                attempt + 1
            );
            if attempt + 1 < RETRY_COUNT {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }

        Err(PolyglotError::Translate(format!(
            "all attempts exhausted: {last_error}"
        )))
    }

    /// The supported-languages list, cached for the process lifetime.
    ///
    /// On fetch failure the fixed fallback list is substituted without being
    /// cached, so the next call retries the real fetch.
    async fn languages(&self) -> BTreeMap<String, String> {
        let mut cache = self.languages.lock().await;
        if let Some(ref langs) = *cache {
            return langs.clone();
        }
        match self.fetch_languages().await {
            Ok(langs) => {
                info!("language list fetched and cached ({} entries)", langs.len());
                *cache = Some(langs.clone());
                langs
            }
            Err(e) => {
                warn!("language list fetch failed, using fallback: {e}");
                fallback_languages()
            }
        }
    }
}

/// Fixed substitute list used when the remote language list is unavailable.
pub fn fallback_languages() -> BTreeMap<String, String> {
    [
        ("en", "English"),
        ("ru", "Русский"),
        ("es", "Español"),
        ("fr", "Français"),
        ("de", "Deutsch"),
        ("it", "Italiano"),
        ("pt", "Português"),
        ("zh", "中文"),
        ("ja", "日本語"),
        ("ko", "한국어"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TranslateClient {
        // Unroutable base URL: any test that hits the network fails fast,
        // which is exactly what the short-circuit tests rely on not doing.
        TranslateClient::new(&TranslateConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_secs: 1,
        })
    }

    #[tokio::test]
    async fn test_empty_text_fails_without_network() {
        let c = client();
        assert!(c.translate("", "en", "ru").await.is_err());
        assert!(c.translate("   \n\t", "en", "ru").await.is_err());
    }

    #[tokio::test]
    async fn test_same_language_returns_input_unchanged() {
        let c = client();
        let out = c.translate("hello there", "en", "en").await.unwrap();
        assert_eq!(out, "hello there");
    }

    #[test]
    fn test_fallback_list_has_ten_languages() {
        let langs = fallback_languages();
        assert_eq!(langs.len(), 10);
        assert_eq!(langs.get("en").map(String::as_str), Some("English"));
        assert_eq!(langs.get("ja").map(String::as_str), Some("日本語"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let c = TranslateClient::new(&TranslateConfig {
            base_url: "https://example.com/".to_string(),
            request_timeout_secs: 10,
        });
        assert_eq!(c.base_url, "https://example.com");
    }
}
