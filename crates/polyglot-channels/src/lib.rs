//! # polyglot-channels
//!
//! Messaging platform integrations. Currently Telegram only.

pub mod telegram;

pub use telegram::TelegramChannel;
