//! Outbound Bot API calls: send, edit, delete, acknowledge, commands menu.

use super::types::TgResponse;
use super::TelegramChannel;
use polyglot_core::{error::PolyglotError, event::InlineKeyboard};
use tracing::{info, warn};

/// Telegram's hard limit on message text length.
pub(crate) const MESSAGE_LIMIT: usize = 4096;

impl TelegramChannel {
    /// POST a Bot API method and surface an `ok: false` reply as an error.
    async fn call(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<(), PolyglotError> {
        let url = format!("{}/{method}", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| PolyglotError::Channel(format!("telegram {method} failed: {e}")))?;

        let body: TgResponse<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| PolyglotError::Channel(format!("telegram {method} parse failed: {e}")))?;

        if !body.ok {
            return Err(PolyglotError::Channel(format!(
                "telegram {method} rejected: {}",
                body.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Send text to a chat, splitting past the message limit. The keyboard
    /// rides on the last chunk so it sits under the visible end of the text.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError> {
        let chunks = split_message(text, MESSAGE_LIMIT);
        let last = chunks.len() - 1;

        for (i, chunk) in chunks.iter().enumerate() {
            let mut body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
            });
            if i == last {
                if let Some(kb) = keyboard {
                    body["reply_markup"] = serde_json::to_value(kb)?;
                }
            }
            self.call("sendMessage", &body).await?;
        }
        Ok(())
    }

    pub(crate) async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        if let Some(kb) = keyboard {
            body["reply_markup"] = serde_json::to_value(kb)?;
        }
        self.call("editMessageText", &body).await
    }

    pub(crate) async fn edit_message_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        keyboard: &InlineKeyboard,
    ) -> Result<(), PolyglotError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "reply_markup": serde_json::to_value(keyboard)?,
        });
        self.call("editMessageReplyMarkup", &body).await
    }

    pub(crate) async fn delete_message_api(
        &self,
        chat_id: i64,
        message_id: i64,
    ) -> Result<(), PolyglotError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id,
        });
        self.call("deleteMessage", &body).await
    }

    pub(crate) async fn answer_callback_query(
        &self,
        callback_id: &str,
        text: Option<&str>,
        alert: bool,
    ) -> Result<(), PolyglotError> {
        let mut body = serde_json::json!({
            "callback_query_id": callback_id,
            "show_alert": alert,
        });
        if let Some(t) = text {
            body["text"] = serde_json::Value::String(t.to_string());
        }
        self.call("answerCallbackQuery", &body).await
    }

    /// Register the commands menu: a default scope for everyone, and a
    /// per-chat scope for each admin that adds the moderation commands.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let user_commands = serde_json::json!([
            { "command": "start", "description": "Main menu" },
            { "command": "help", "description": "How to use the bot" },
            { "command": "translate", "description": "Translate a message" },
            { "command": "setlanguage", "description": "Choose translation languages" },
            { "command": "history", "description": "Your recent translations" },
            { "command": "clear_history", "description": "Delete your translation history" },
        ]);

        let mut admin_commands = user_commands.as_array().cloned().unwrap_or_default();
        admin_commands.extend([
            serde_json::json!({ "command": "admin", "description": "Admin panel" }),
            serde_json::json!({ "command": "stats", "description": "Usage statistics" }),
            serde_json::json!({ "command": "broadcast", "description": "Message all users" }),
            serde_json::json!({ "command": "ban", "description": "Ban a user" }),
            serde_json::json!({ "command": "unban", "description": "Unban a user" }),
        ]);

        let default_scope = serde_json::json!({ "commands": user_commands });
        match self.call("setMyCommands", &default_scope).await {
            Ok(()) => info!("registered Telegram bot commands"),
            Err(e) => warn!("failed to register Telegram bot commands: {e}"),
        }

        for admin_id in &self.config.admin_ids {
            let scoped = serde_json::json!({
                "commands": admin_commands,
                "scope": { "type": "chat", "chat_id": admin_id },
            });
            if let Err(e) = self.call("setMyCommands", &scoped).await {
                warn!("failed to register admin commands for {admin_id}: {e}");
            }
        }
    }
}

/// Split a long message into chunks that respect Telegram's limit.
///
/// Prefers breaking at a newline; otherwise falls back to the nearest char
/// boundary at or below the limit, so multi-byte text never splits mid-char.
pub(crate) fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.len() <= max_len {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + max_len).min(text.len());
        while end > start && !text.is_char_boundary(end) {
            end -= 1;
        }
        let break_at = if end < text.len() {
            text[start..end]
                .rfind('\n')
                .map(|i| start + i + 1)
                .unwrap_or(end)
        } else {
            end
        };
        chunks.push(&text[start..break_at]);
        start = break_at;
    }

    chunks
}
