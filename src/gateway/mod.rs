//! Gateway — the main event loop connecting the channel, the stores, and the
//! translator.
//!
//! Per-event pipeline: rate-limit gate (admin bypass) → first-contact
//! language pick → ban check → dispatch (command, callback, or FSM input).

mod broadcast;
mod callbacks;
mod commands;
mod pipeline;
pub mod ratelimit;


use crate::fsm::Conversations;
use polyglot_core::{
    event::InlineKeyboard,
    lang::UiLang,
    traits::{Channel, Translator},
};
use polyglot_storage::{history::HistoryStore, moderation::BanStore, settings::SettingsStore};
use ratelimit::RateLimiter;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// The central gateway that routes inbound events to handlers.
pub struct Gateway {
    pub(super) channel: Arc<dyn Channel>,
    pub(super) translator: Arc<dyn Translator>,
    pub(super) settings: Arc<SettingsStore>,
    pub(super) history: Arc<HistoryStore>,
    pub(super) bans: Arc<BanStore>,
    pub(super) conversations: Conversations,
    pub(super) ratelimit: RateLimiter,
    pub(super) admin_ids: Vec<i64>,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channel: Arc<dyn Channel>,
        translator: Arc<dyn Translator>,
        settings: Arc<SettingsStore>,
        history: Arc<HistoryStore>,
        bans: Arc<BanStore>,
        admin_ids: Vec<i64>,
        min_interval_secs: f64,
    ) -> Self {
        Self {
            channel,
            translator,
            settings,
            history,
            bans,
            conversations: Conversations::new(),
            ratelimit: RateLimiter::new(min_interval_secs),
            admin_ids,
        }
    }

    /// Run the main event loop until the channel closes or ctrl-c.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Polyglot gateway running | channel: {} | admins: {}",
            self.channel.name(),
            self.admin_ids.len(),
        );

        let mut rx: mpsc::Receiver<_> = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel: {e}"))?;

        loop {
            tokio::select! {
                maybe_event = rx.recv() => {
                    match maybe_event {
                        Some(event) => {
                            let gw = self.clone();
                            tokio::spawn(async move {
                                gw.handle_event(event).await;
                            });
                        }
                        None => {
                            info!("channel closed, shutting down");
                            break;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        self.channel.stop().await?;
        Ok(())
    }

    pub(super) fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// The user's interface language.
    pub(super) async fn ui_lang(&self, user_id: i64) -> UiLang {
        self.settings.get(user_id).await.language
    }

    /// Send a message, logging delivery failures instead of propagating them.
    pub(super) async fn say(&self, chat_id: i64, text: &str, keyboard: Option<&InlineKeyboard>) {
        if let Err(e) = self.channel.send(chat_id, text, keyboard).await {
            warn!("failed to send to chat {chat_id}: {e}");
        }
    }

    /// Edit a message in place, falling back to a fresh send when the edit is
    /// rejected (e.g. the message is too old).
    pub(super) async fn revise(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) {
        if let Err(e) = self
            .channel
            .edit_text(chat_id, message_id, text, keyboard)
            .await
        {
            warn!("failed to edit message {message_id} in chat {chat_id}: {e}");
            self.say(chat_id, text, keyboard).await;
        }
    }

    /// Acknowledge a callback press, logging failures.
    pub(super) async fn ack(&self, callback_id: &str, text: Option<&str>, alert: bool) {
        if let Err(e) = self.channel.answer_callback(callback_id, text, alert).await {
            warn!("failed to answer callback {callback_id}: {e}");
        }
    }
}
