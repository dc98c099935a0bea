use crate::{
    error::PolyglotError,
    event::{InboundEvent, InlineKeyboard},
};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Messaging channel trait.
///
/// The chat platform implements this to deliver inbound events and accept
/// the outbound actions the bot performs (send, edit, delete, acknowledge).
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for inbound events.
    /// Returns a receiver that yields events as they arrive.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<InboundEvent>, PolyglotError>;

    /// Send a text message, optionally with an inline keyboard.
    async fn send(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError>;

    /// Replace the text (and keyboard) of an existing message.
    async fn edit_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), PolyglotError>;

    /// Replace only the inline keyboard of an existing message.
    async fn edit_reply_markup(
        &self,
        chat_id: i64,
        message_id: i64,
        keyboard: &InlineKeyboard,
    ) -> Result<(), PolyglotError>;

    /// Delete a message.
    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<(), PolyglotError>;

    /// Acknowledge a callback press, optionally with a toast or alert.
    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        alert: bool,
    ) -> Result<(), PolyglotError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), PolyglotError>;
}

/// Translation backend trait.
///
/// Wraps the remote translation API. `languages()` is infallible: the
/// implementation substitutes a fixed fallback list when the remote list
/// cannot be fetched.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` (or "auto") into `target`.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, PolyglotError>;

    /// Supported target languages as `code -> display name`.
    async fn languages(&self) -> BTreeMap<String, String>;
}
