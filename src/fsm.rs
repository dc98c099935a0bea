//! Conversation finite-state machine.
//!
//! One active state per user. Each multi-step flow carries its pending data
//! in the state variant itself, so resetting to `Idle` discards it.

use std::collections::HashMap;
use tokio::sync::Mutex;

/// Where a user currently is in a multi-step conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Idle,
    /// Picking the bot interface language from the keyboard.
    AwaitingInterfaceLanguage,
    /// The next text message is translated once, then back to Idle.
    AwaitingTranslationText,
    /// Admin is typing the broadcast message.
    AwaitingBroadcastMessage,
    /// Admin is confirming the broadcast; the pending message rides along.
    AwaitingBroadcastConfirmation { message: String },
    /// Admin is typing the id of the user to ban.
    AwaitingBanUserId,
    AwaitingBanConfirmation { target: i64 },
    /// Admin is typing the id of the user to unban.
    AwaitingUnbanUserId,
    AwaitingUnbanConfirmation { target: i64 },
}

/// Tracker of conversation states, keyed by user id.
///
/// In-memory only: states reset on restart. Abandoned flows do not expire;
/// the main-menu and cancel buttons are the only escapes.
#[derive(Default)]
pub struct Conversations {
    states: Mutex<HashMap<i64, ConversationState>>,
}

impl Conversations {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's current state; `Idle` when untracked.
    pub async fn get(&self, user_id: i64) -> ConversationState {
        self.states
            .lock()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn set(&self, user_id: i64, state: ConversationState) {
        self.states.lock().await.insert(user_id, state);
    }

    /// Reset to `Idle`, discarding any pending flow data.
    pub async fn clear(&self, user_id: i64) {
        self.states.lock().await.remove(&user_id);
    }

    /// Return the current state and reset to `Idle` in one step.
    pub async fn take(&self, user_id: i64) -> ConversationState {
        self.states.lock().await.remove(&user_id).unwrap_or_default()
    }
}
