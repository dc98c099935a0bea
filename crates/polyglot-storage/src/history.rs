//! Per-user translation history, capped and newest-first.
//!
//! The table keys double as the user roster: broadcast and stats derive
//! their "known users" set from `user_ids()`.

use chrono::{DateTime, Utc};
use polyglot_core::error::PolyglotError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Maximum records kept per user; oldest entries are evicted first.
pub const MAX_RECORDS_PER_USER: usize = 50;

/// One completed translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub original: String,
    pub translated: String,
    /// Source language code; may be "auto".
    pub from_lang: String,
    pub to_lang: String,
    /// Stamped at insertion time, never supplied by the caller.
    pub timestamp: DateTime<Utc>,
}

/// Write-through history ledger.
pub struct HistoryStore {
    path: PathBuf,
    table: Mutex<HashMap<i64, Vec<HistoryRecord>>>,
    /// Non-numeric keys found on load, preserved verbatim across rewrites.
    strays: HashMap<String, Vec<HistoryRecord>>,
}

impl HistoryStore {
    /// Open the store, loading the backing file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PolyglotError> {
        let path = path.into();
        let (table, strays) = match super::read_document(&path)? {
            Some(content) => {
                let raw: HashMap<String, Vec<HistoryRecord>> = serde_json::from_str(&content)?;
                super::partition_keys(raw, "history")
            }
            None => (HashMap::new(), HashMap::new()),
        };
        info!("history store loaded: {} users", table.len());
        Ok(Self {
            path,
            table: Mutex::new(table),
            strays,
        })
    }

    /// Prepend a record for the user, stamp its timestamp, evict beyond the
    /// cap, and persist the whole table.
    ///
    /// An empty translation is never stored.
    pub async fn add(
        &self,
        user_id: i64,
        original: &str,
        translated: &str,
        from_lang: &str,
        to_lang: &str,
    ) -> Result<(), PolyglotError> {
        if translated.trim().is_empty() {
            return Err(PolyglotError::Storage(
                "refusing to store empty translation".to_string(),
            ));
        }
        let record = HistoryRecord {
            original: original.to_string(),
            translated: translated.to_string(),
            from_lang: from_lang.to_string(),
            to_lang: to_lang.to_string(),
            timestamp: Utc::now(),
        };

        let mut table = self.table.lock().await;
        let list = table.entry(user_id).or_default();
        list.insert(0, record);
        list.truncate(MAX_RECORDS_PER_USER);
        self.persist(&table)
    }

    /// The user's most recent records, newest first, at most `limit`.
    pub async fn recent(&self, user_id: i64, limit: usize) -> Vec<HistoryRecord> {
        self.table
            .lock()
            .await
            .get(&user_id)
            .map(|list| list.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Remove the user's history entirely. Ok even when there was none.
    pub async fn clear(&self, user_id: i64) -> Result<(), PolyglotError> {
        let mut table = self.table.lock().await;
        if table.remove(&user_id).is_none() {
            return Ok(());
        }
        self.persist(&table)
    }

    /// All user ids known to the ledger — the broadcast roster.
    pub async fn user_ids(&self) -> Vec<i64> {
        self.table.lock().await.keys().copied().collect()
    }

    /// Total record count across all users (for stats).
    pub async fn total_records(&self) -> usize {
        self.table.lock().await.values().map(Vec::len).sum()
    }

    fn persist(&self, table: &HashMap<i64, Vec<HistoryRecord>>) -> Result<(), PolyglotError> {
        let mut keyed: HashMap<String, &Vec<HistoryRecord>> =
            table.iter().map(|(k, v)| (k.to_string(), v)).collect();
        keyed.extend(self.strays.iter().map(|(k, v)| (k.clone(), v)));
        let json = serde_json::to_string_pretty(&keyed)?;
        super::write_document(&self.path, &json).inspect_err(|e| {
            error!("failed to save history: {e}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::open(dir.path().join("history.json")).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_recent_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(1, "hello", "привет", "auto", "ru").await.unwrap();
        store.add(1, "world", "мир", "auto", "ru").await.unwrap();

        let recent = store.recent(1, 5).await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].original, "world");
        assert_eq!(recent[1].original, "hello");
    }

    #[tokio::test]
    async fn test_cap_evicts_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        for i in 0..60 {
            store
                .add(1, &format!("msg {i}"), "ok", "auto", "en")
                .await
                .unwrap();
        }
        let all = store.recent(1, 100).await;
        assert_eq!(all.len(), MAX_RECORDS_PER_USER);
        // Newest first: the last insert leads, the first ten are gone.
        assert_eq!(all[0].original, "msg 59");
        assert_eq!(all[49].original, "msg 10");
    }

    #[tokio::test]
    async fn test_empty_translation_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.add(1, "hello", "   ", "auto", "ru").await.is_err());
        assert!(store.recent(1, 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_ok_without_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear(999).await.unwrap();

        store.add(1, "a", "b", "auto", "en").await.unwrap();
        store.clear(1).await.unwrap();
        assert!(store.recent(1, 5).await.is_empty());
        assert!(store.user_ids().await.is_empty());
    }

    #[tokio::test]
    async fn test_roster_and_totals() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.add(1, "a", "b", "auto", "en").await.unwrap();
        store.add(1, "c", "d", "auto", "en").await.unwrap();
        store.add(2, "e", "f", "auto", "ru").await.unwrap();

        let mut ids = store.user_ids().await;
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.total_records().await, 3);
    }

    #[tokio::test]
    async fn test_non_numeric_keys_survive_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, r#"{"stray": []}"#).unwrap();

        let store = HistoryStore::open(&path).unwrap();
        assert!(store.user_ids().await.is_empty());

        store.add(1, "a", "b", "auto", "en").await.unwrap();
        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("stray"));
    }

    #[tokio::test]
    async fn test_reload_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        {
            let store = HistoryStore::open(&path).unwrap();
            store.add(7, "one", "один", "auto", "ru").await.unwrap();
            store.add(7, "two", "два", "auto", "ru").await.unwrap();
        }
        let reloaded = HistoryStore::open(&path).unwrap();
        let recent = reloaded.recent(7, 5).await;
        assert_eq!(recent[0].original, "two");
        assert_eq!(recent[1].original, "one");
    }
}
