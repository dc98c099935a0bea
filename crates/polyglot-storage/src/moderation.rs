//! Banned-user set, persisted as a flat JSON array of ids.

use polyglot_core::error::PolyglotError;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Durable set of banned user ids.
pub struct BanStore {
    path: PathBuf,
    banned: Mutex<BTreeSet<i64>>,
}

impl BanStore {
    /// Open the store, loading the backing file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PolyglotError> {
        let path = path.into();
        let banned: BTreeSet<i64> = match super::read_document(&path)? {
            Some(content) => serde_json::from_str::<Vec<i64>>(&content)?
                .into_iter()
                .collect(),
            None => BTreeSet::new(),
        };
        info!("ban store loaded: {} banned users", banned.len());
        Ok(Self {
            path,
            banned: Mutex::new(banned),
        })
    }

    pub async fn is_banned(&self, user_id: i64) -> bool {
        self.banned.lock().await.contains(&user_id)
    }

    /// Add a user to the banned set and persist. Idempotent.
    pub async fn ban(&self, user_id: i64) -> Result<(), PolyglotError> {
        let mut banned = self.banned.lock().await;
        banned.insert(user_id);
        self.persist(&banned)
    }

    /// Remove a user from the banned set and persist. Idempotent.
    pub async fn unban(&self, user_id: i64) -> Result<(), PolyglotError> {
        let mut banned = self.banned.lock().await;
        banned.remove(&user_id);
        self.persist(&banned)
    }

    /// The banned set, ascending.
    pub async fn list(&self) -> Vec<i64> {
        self.banned.lock().await.iter().copied().collect()
    }

    pub async fn count(&self) -> usize {
        self.banned.lock().await.len()
    }

    fn persist(&self, banned: &BTreeSet<i64>) -> Result<(), PolyglotError> {
        let list: Vec<i64> = banned.iter().copied().collect();
        let json = serde_json::to_string_pretty(&list)?;
        super::write_document(&self.path, &json).inspect_err(|e| {
            error!("failed to save banned users: {e}");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ban_unban_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banned_users.json");
        {
            let store = BanStore::open(&path).unwrap();
            store.ban(42).await.unwrap();
            store.ban(7).await.unwrap();
            store.ban(42).await.unwrap(); // set semantics, no duplicate
            assert!(store.is_banned(42).await);
            assert_eq!(store.list().await, vec![7, 42]);
        }
        let reloaded = BanStore::open(&path).unwrap();
        assert_eq!(reloaded.count().await, 2);
        reloaded.unban(42).await.unwrap();
        assert!(!reloaded.is_banned(42).await);
        assert_eq!(reloaded.list().await, vec![7]);
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = BanStore::open(dir.path().join("banned_users.json")).unwrap();
        assert_eq!(store.count().await, 0);
        assert!(!store.is_banned(1).await);
    }
}
