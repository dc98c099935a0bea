use serde::{Deserialize, Serialize};

/// An inbound event from the chat platform.
///
/// A tagged union over the two update shapes the bot handles: plain text
/// messages and inline-keyboard button presses. Dispatch matches on this
/// exhaustively, so a new variant forces every handler to take a position.
#[derive(Debug, Clone)]
pub enum InboundEvent {
    /// A text message.
    Text {
        /// Platform user id of the sender.
        actor_id: i64,
        /// Chat to reply into (same as `actor_id` for private chats).
        chat_id: i64,
        /// Message text.
        text: String,
        /// Locale hint declared by the client (e.g. "ru-RU"), if any.
        declared_locale: Option<String>,
    },
    /// An inline-keyboard callback.
    Callback {
        /// Platform user id of the presser.
        actor_id: i64,
        /// Chat containing the message the keyboard is attached to.
        chat_id: i64,
        /// Message the keyboard is attached to.
        message_id: i64,
        /// Opaque id used to acknowledge the press.
        callback_id: String,
        /// The button's callback data payload.
        data: String,
        /// Locale hint declared by the client, if any.
        declared_locale: Option<String>,
    },
}

impl InboundEvent {
    /// The acting user's id, regardless of event shape.
    pub fn actor_id(&self) -> i64 {
        match self {
            Self::Text { actor_id, .. } | Self::Callback { actor_id, .. } => *actor_id,
        }
    }

    /// The chat to respond into.
    pub fn chat_id(&self) -> i64 {
        match self {
            Self::Text { chat_id, .. } | Self::Callback { chat_id, .. } => *chat_id,
        }
    }

    /// The declared locale hint, if the client sent one.
    pub fn declared_locale(&self) -> Option<&str> {
        match self {
            Self::Text {
                declared_locale, ..
            }
            | Self::Callback {
                declared_locale, ..
            } => declared_locale.as_deref(),
        }
    }
}

/// An inline keyboard attached to an outgoing or edited message.
///
/// Serializes to the Bot API `reply_markup` shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }
}

/// A single inline button with a callback payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_serializes_to_reply_markup_shape() {
        let kb = InlineKeyboard::new(vec![vec![InlineButton::new("Go", "go")]]);
        let json = serde_json::to_value(&kb).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inline_keyboard": [[{"text": "Go", "callback_data": "go"}]]
            })
        );
    }

    #[test]
    fn test_event_accessors() {
        let ev = InboundEvent::Callback {
            actor_id: 7,
            chat_id: 9,
            message_id: 11,
            callback_id: "cb".into(),
            data: "main_menu".into(),
            declared_locale: Some("ru".into()),
        };
        assert_eq!(ev.actor_id(), 7);
        assert_eq!(ev.chat_id(), 9);
        assert_eq!(ev.declared_locale(), Some("ru"));
    }
}
