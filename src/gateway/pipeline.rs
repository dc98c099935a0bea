//! Per-event processing pipeline.

use super::ratelimit::Admission;
use super::Gateway;
use crate::i18n;
use polyglot_core::{event::InboundEvent, lang::UiLang};
use tracing::{info, warn};

impl Gateway {
    /// Process a single inbound event through the full pipeline.
    pub(crate) async fn handle_event(&self, event: InboundEvent) {
        let actor_id = event.actor_id();
        let privileged = self.is_admin(actor_id);

        // --- 1. RATE LIMIT ---
        if let Admission::Denied { retry_after_secs } =
            self.ratelimit.admit(actor_id, privileged).await
        {
            let lang = self.ui_lang(actor_id).await;
            let notice = i18n::rate_limited(lang, retry_after_secs);
            match &event {
                InboundEvent::Text { chat_id, .. } => {
                    self.say(*chat_id, &notice, None).await;
                }
                InboundEvent::Callback { callback_id, .. } => {
                    // Alert popup, not a silent toast: the press did nothing.
                    self.ack(callback_id, Some(&notice), true).await;
                }
            }
            return;
        }

        // --- 2. FIRST CONTACT: PICK INTERFACE LANGUAGE FROM LOCALE ---
        if !self.settings.contains(actor_id).await {
            let lang = UiLang::from_declared_locale(event.declared_locale().unwrap_or(""));
            info!("new user {actor_id}, interface language {}", lang.code());
            if let Err(e) = self.settings.set_language(actor_id, lang).await {
                warn!("failed to persist language for new user {actor_id}: {e}");
            }
        }

        // --- 3. BAN CHECK ---
        if self.bans.is_banned(actor_id).await {
            let notice = i18n::t("banned_notice", UiLang::En);
            match &event {
                InboundEvent::Text { chat_id, .. } => {
                    self.say(*chat_id, notice, None).await;
                }
                InboundEvent::Callback { callback_id, .. } => {
                    self.ack(callback_id, Some(notice), true).await;
                }
            }
            return;
        }

        // --- 4. DISPATCH ---
        match event {
            InboundEvent::Text {
                actor_id,
                chat_id,
                text,
                ..
            } => self.handle_text(actor_id, chat_id, &text).await,
            InboundEvent::Callback {
                actor_id,
                chat_id,
                message_id,
                callback_id,
                data,
                ..
            } => {
                self.handle_callback(actor_id, chat_id, message_id, &callback_id, &data)
                    .await
            }
        }
    }
}
