//! Broadcast fan-out to every known, non-banned user.

use super::Gateway;
use crate::i18n;
use polyglot_core::traits::Channel;
use polyglot_storage::{history::HistoryStore, moderation::BanStore};
use tracing::{info, warn};

impl Gateway {
    /// Fan the broadcast out in a background task and report the result back
    /// to the admin chat when done.
    pub(super) async fn spawn_broadcast(&self, admin_id: i64, admin_chat: i64, message: String) {
        let channel = self.channel.clone();
        let history = self.history.clone();
        let bans = self.bans.clone();
        let lang = self.ui_lang(admin_id).await;

        tokio::spawn(async move {
            let (success, errors) = run_broadcast(&*channel, &history, &bans, &message).await;
            info!("broadcast done: {success} delivered, {errors} errors");
            if let Err(e) = channel
                .send(
                    admin_chat,
                    &i18n::broadcast_result(lang, success, errors),
                    None,
                )
                .await
            {
                warn!("failed to report broadcast result: {e}");
            }
        });
    }
}

/// One delivery attempt per user on the roster; failures are counted and do
/// not stop the fan-out. Roster = everyone in the history ledger minus the
/// banned set.
pub(super) async fn run_broadcast(
    channel: &dyn Channel,
    history: &HistoryStore,
    bans: &BanStore,
    message: &str,
) -> (usize, usize) {
    let mut success = 0;
    let mut errors = 0;

    for user_id in history.user_ids().await {
        if bans.is_banned(user_id).await {
            continue;
        }
        match channel.send(user_id, message, None).await {
            Ok(()) => success += 1,
            Err(e) => {
                warn!("broadcast to {user_id} failed: {e}");
                errors += 1;
            }
        }
    }

    (success, errors)
}
