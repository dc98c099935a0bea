//! Long-polling update loop and Channel trait implementation.

use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use polyglot_core::{
    error::PolyglotError,
    event::{InboundEvent, InlineKeyboard},
    traits::Channel,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<InboundEvent>, PolyglotError> {
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let last = last_update_id.lock().await;
                let offset = last.map(|id| id + 1);
                drop(last);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(std::time::Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(60);
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let event = match map_update(update) {
                        Some(ev) => ev,
                        None => continue,
                    };

                    if tx.send(event).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError> {
        self.send_text(chat_id, text, keyboard).await
    }

    async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError> {
        self.edit_message_text(chat_id, message_id, text, keyboard)
            .await
    }

    async fn edit_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        keyboard: &InlineKeyboard,
    ) -> Result<(), PolyglotError> {
        self.edit_message_reply_markup(chat_id, message_id, keyboard)
            .await
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), PolyglotError> {
        self.delete_message_api(chat_id, message_id).await
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        alert: bool,
    ) -> Result<(), PolyglotError> {
        self.answer_callback_query(callback_id, text, alert).await
    }

    async fn stop(&self) -> Result<(), PolyglotError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

/// Map one raw update into an inbound event, or None when it carries nothing
/// the bot handles (group chats, non-text messages, dataless callbacks).
pub(crate) fn map_update(update: TgUpdate) -> Option<InboundEvent> {
    if let Some(cb) = update.callback_query {
        let msg = match cb.message {
            Some(m) => m,
            None => {
                debug!("telegram: callback {} has no message, dropping", cb.id);
                return None;
            }
        };
        let data = cb.data?;
        return Some(InboundEvent::Callback {
            actor_id: cb.from.id,
            chat_id: msg.chat.id,
            message_id: msg.message_id,
            callback_id: cb.id,
            data,
            declared_locale: cb.from.language_code,
        });
    }

    let msg = update.message?;

    // The bot only talks person-to-person.
    if matches!(msg.chat.chat_type.as_str(), "group" | "supergroup") {
        debug!("telegram: ignoring group message from chat {}", msg.chat.id);
        return None;
    }

    let text = msg.text?;
    let user = msg.from?;

    Some(InboundEvent::Text {
        actor_id: user.id,
        chat_id: msg.chat.id,
        text,
        declared_locale: user.language_code,
    })
}
