//! # polyglot-storage
//!
//! Durable per-user state for Polyglot, kept as whole-document JSON files:
//! - `settings` — interface language and translation language preferences
//! - `history` — capped per-user translation history (also the user roster)
//! - `moderation` — the banned-user set
//!
//! Every store is an explicit object holding its own lock; each mutation is
//! write-through (the whole document is rewritten under the lock). A failed
//! disk write is logged and surfaced to the caller, but the in-memory
//! mutation stands — memory is the source of truth for the process lifetime.

pub mod history;
pub mod moderation;
pub mod settings;

pub use history::{HistoryRecord, HistoryStore};
pub use moderation::BanStore;
pub use settings::{SettingsStore, UserSettings};

use polyglot_core::error::PolyglotError;
use std::collections::HashMap;
use std::path::Path;

/// Read a JSON document from `path`, returning `None` for a missing or
/// empty file (both mean "fresh store", never an error).
fn read_document(path: &Path) -> Result<Option<String>, PolyglotError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}

/// Write a JSON document to `path`, creating the parent directory if needed.
fn write_document(path: &Path, json: &str) -> Result<(), PolyglotError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Partition stringified keys loaded from disk into `i64` user ids and
/// non-numeric strays.
///
/// Hand-edited files may contain non-numeric keys; those pass through
/// unchanged into the stray map and are written back on every save, so a
/// rewrite never destroys them.
fn partition_keys<V>(
    raw: HashMap<String, V>,
    store: &str,
) -> (HashMap<i64, V>, HashMap<String, V>) {
    let mut table = HashMap::with_capacity(raw.len());
    let mut strays = HashMap::new();
    for (key, value) in raw {
        match key.parse::<i64>() {
            Ok(id) => {
                table.insert(id, value);
            }
            Err(_) => {
                tracing::warn!("{store}: retaining non-numeric key '{key}'");
                strays.insert(key, value);
            }
        }
    }
    (table, strays)
}
