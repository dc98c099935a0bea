use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PolyglotError;

/// Top-level Polyglot configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Directory for rotating log files.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_dir: default_log_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Telegram bot config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Administrator user ids. Admins bypass the rate limiter and may use
    /// the admin panel.
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

/// Translation API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Storage config — where the JSON store documents live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

/// Rate-limit config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Minimum interval between accepted events per user, in seconds.
    #[serde(default = "default_min_interval")]
    pub min_interval_secs: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_interval_secs: default_min_interval(),
        }
    }
}

fn default_name() -> String {
    "polyglot".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    "https://ftapi.pythonanywhere.com".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_storage_dir() -> String {
    "storage".to_string()
}

fn default_min_interval() -> f64 {
    2.0
}

/// Load configuration from a TOML file, then apply environment overrides.
///
/// Falls back to defaults if the file does not exist. `BOT_TOKEN`,
/// `ADMIN_IDS` (comma-separated), and `TRANSLATION_API_URL` always win over
/// file values when set.
pub fn load(path: &str) -> Result<Config, PolyglotError> {
    let path = Path::new(path);
    let mut config = if path.exists() {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PolyglotError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| PolyglotError::Config(format!("failed to parse config: {e}")))?
    } else {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) -> Result<(), PolyglotError> {
    if let Ok(token) = std::env::var("BOT_TOKEN") {
        if !token.is_empty() {
            config.telegram.bot_token = token;
        }
    }
    if let Ok(ids) = std::env::var("ADMIN_IDS") {
        if !ids.trim().is_empty() {
            config.telegram.admin_ids = parse_admin_ids(&ids)?;
        }
    }
    if let Ok(url) = std::env::var("TRANSLATION_API_URL") {
        if !url.is_empty() {
            config.translate.base_url = url.trim_end_matches('/').to_string();
        }
    }
    Ok(())
}

/// Parse a comma-separated admin id list (e.g. "123, 456").
pub fn parse_admin_ids(raw: &str) -> Result<Vec<i64>, PolyglotError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| PolyglotError::Config(format!("invalid admin id '{s}': {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bot.name, "polyglot");
        assert_eq!(config.translate.base_url, "https://ftapi.pythonanywhere.com");
        assert_eq!(config.translate.request_timeout_secs, 10);
        assert_eq!(config.storage.dir, "storage");
        assert!((config.limits.min_interval_secs - 2.0).abs() < f64::EPSILON);
        assert!(config.telegram.bot_token.is_empty());
        assert!(config.telegram.admin_ids.is_empty());
    }

    #[test]
    fn test_parse_admin_ids() {
        assert_eq!(parse_admin_ids("1,2, 3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_admin_ids(" 42 ").unwrap(), vec![42]);
        assert_eq!(parse_admin_ids("").unwrap(), Vec::<i64>::new());
        assert!(parse_admin_ids("1,abc").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [telegram]
            bot_token = "123:abc"
            admin_ids = [111, 222]

            [limits]
            min_interval_secs = 1.5
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert_eq!(config.telegram.admin_ids, vec![111, 222]);
        assert!((config.limits.min_interval_secs - 1.5).abs() < f64::EPSILON);
        // Unspecified sections fall back to defaults.
        assert_eq!(config.bot.log_level, "info");
    }
}
