//! Per-user settings: interface language and translation language pair.

use polyglot_core::{error::PolyglotError, lang::UiLang};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Settings blob for one user. Absence of a record implies these defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Interface language for bot messages.
    #[serde(default)]
    pub language: UiLang,
    /// Source language for translation ("auto" = detect).
    #[serde(default = "default_source")]
    pub translate_source: String,
    /// Target language for translation.
    #[serde(default = "default_target")]
    pub translate_target: String,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: UiLang::default(),
            translate_source: default_source(),
            translate_target: default_target(),
        }
    }
}

fn default_source() -> String {
    "auto".to_string()
}

fn default_target() -> String {
    "en".to_string()
}

/// Write-through store of per-user settings.
///
/// Records are created lazily on first write; `get` never fails and never
/// creates a record.
pub struct SettingsStore {
    path: PathBuf,
    table: Mutex<HashMap<i64, UserSettings>>,
    /// Non-numeric keys found on load, preserved verbatim across rewrites.
    strays: HashMap<String, UserSettings>,
}

impl SettingsStore {
    /// Open the store, loading the backing file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PolyglotError> {
        let path = path.into();
        let (table, strays) = match super::read_document(&path)? {
            Some(content) => {
                let raw: HashMap<String, UserSettings> = serde_json::from_str(&content)?;
                super::partition_keys(raw, "settings")
            }
            None => (HashMap::new(), HashMap::new()),
        };
        info!("settings store loaded: {} users", table.len());
        Ok(Self {
            path,
            table: Mutex::new(table),
            strays,
        })
    }

    /// Get a user's settings, defaulted if no record exists.
    pub async fn get(&self, user_id: i64) -> UserSettings {
        self.table
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the user has a persisted record (as opposed to defaults).
    pub async fn contains(&self, user_id: i64) -> bool {
        self.table.lock().await.contains_key(&user_id)
    }

    /// Set the interface language, persisting the whole table.
    pub async fn set_language(&self, user_id: i64, language: UiLang) -> Result<(), PolyglotError> {
        let mut table = self.table.lock().await;
        table.entry(user_id).or_default().language = language;
        self.persist(&table)
    }

    /// Set the translation language pair, persisting the whole table.
    pub async fn set_translate_languages(
        &self,
        user_id: i64,
        source: &str,
        target: &str,
    ) -> Result<(), PolyglotError> {
        let mut table = self.table.lock().await;
        let entry = table.entry(user_id).or_default();
        entry.translate_source = source.to_string();
        entry.translate_target = target.to_string();
        self.persist(&table)
    }

    /// Number of users with a persisted record.
    pub async fn count(&self) -> usize {
        self.table.lock().await.len()
    }

    /// Serialize the whole table and rewrite the backing file.
    ///
    /// Called with the table lock held, so concurrent writers cannot
    /// interleave their file rewrites. The in-memory mutation is NOT rolled
    /// back on failure.
    fn persist(&self, table: &HashMap<i64, UserSettings>) -> Result<(), PolyglotError> {
        let mut keyed: HashMap<String, &UserSettings> =
            table.iter().map(|(k, v)| (k.to_string(), v)).collect();
        keyed.extend(self.strays.iter().map(|(k, v)| (k.clone(), v)));
        let json = serde_json::to_string_pretty(&keyed)?;
        super::write_document(&self.path, &json).inspect_err(|e| {
            error!("failed to save settings: {e}");
        })
    }
}
