//! Text message handling: slash commands and FSM-state input.

use super::Gateway;
use crate::fsm::ConversationState;
use crate::i18n::{self, t};
use crate::keyboards;
use polyglot_core::lang::UiLang;
use tracing::{info, warn};

impl Gateway {
    pub(super) async fn handle_text(&self, actor_id: i64, chat_id: i64, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if text.starts_with('/') {
            self.handle_command(actor_id, chat_id, text).await;
            return;
        }

        let lang = self.ui_lang(actor_id).await;
        match self.conversations.get(actor_id).await {
            ConversationState::AwaitingTranslationText => {
                // Strictly one-shot: back to Idle whatever the outcome.
                self.conversations.clear(actor_id).await;
                self.translate_and_reply(actor_id, chat_id, text).await;
            }
            ConversationState::AwaitingBroadcastMessage => {
                self.conversations
                    .set(
                        actor_id,
                        ConversationState::AwaitingBroadcastConfirmation {
                            message: text.to_string(),
                        },
                    )
                    .await;
                self.say(
                    chat_id,
                    &i18n::broadcast_preview(lang, text),
                    Some(&keyboards::confirm(lang, "broadcast_confirm", "broadcast_cancel")),
                )
                .await;
            }
            ConversationState::AwaitingBanUserId => {
                let target = match text.parse::<i64>() {
                    Ok(id) => id,
                    Err(_) => {
                        self.say(chat_id, t("invalid_user_id", lang), None).await;
                        return;
                    }
                };
                if target == actor_id {
                    self.say(chat_id, t("cannot_ban_self", lang), None).await;
                    return;
                }
                if self.bans.is_banned(target).await {
                    self.say(chat_id, t("already_banned", lang), None).await;
                    return;
                }
                self.conversations
                    .set(actor_id, ConversationState::AwaitingBanConfirmation { target })
                    .await;
                self.say(
                    chat_id,
                    &i18n::ban_confirm_prompt(lang, target),
                    Some(&keyboards::confirm(lang, "ban_confirm", "ban_cancel")),
                )
                .await;
            }
            ConversationState::AwaitingUnbanUserId => {
                let target = match text.parse::<i64>() {
                    Ok(id) => id,
                    Err(_) => {
                        self.say(chat_id, t("invalid_user_id", lang), None).await;
                        return;
                    }
                };
                if !self.bans.is_banned(target).await {
                    self.say(chat_id, t("not_banned", lang), None).await;
                    return;
                }
                self.conversations
                    .set(
                        actor_id,
                        ConversationState::AwaitingUnbanConfirmation { target },
                    )
                    .await;
                self.say(
                    chat_id,
                    &i18n::unban_confirm_prompt(lang, target),
                    Some(&keyboards::confirm(lang, "unban_confirm", "unban_cancel")),
                )
                .await;
            }
            ConversationState::AwaitingInterfaceLanguage
            | ConversationState::AwaitingBroadcastConfirmation { .. }
            | ConversationState::AwaitingBanConfirmation { .. }
            | ConversationState::AwaitingUnbanConfirmation { .. } => {
                // These states are driven by buttons, not text.
                self.say(chat_id, t("use_buttons", lang), None).await;
            }
            ConversationState::Idle => {
                // Catch-all: any plain text is translated with the user's
                // saved language pair.
                self.translate_and_reply(actor_id, chat_id, text).await;
            }
        }
    }

    async fn handle_command(&self, actor_id: i64, chat_id: i64, text: &str) {
        let lang = self.ui_lang(actor_id).await;
        let command = text.split_whitespace().next().unwrap_or(text);

        match command {
            "/start" => {
                self.conversations.clear(actor_id).await;
                self.say(chat_id, t("welcome", lang), Some(&keyboards::main_menu(lang)))
                    .await;
            }
            "/help" => {
                self.say(chat_id, t("help", lang), Some(&keyboards::help(lang)))
                    .await;
            }
            "/translate" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingTranslationText)
                    .await;
                self.say(
                    chat_id,
                    t("prompt_translate", lang),
                    Some(&keyboards::cancel(lang)),
                )
                .await;
            }
            "/setlanguage" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingInterfaceLanguage)
                    .await;
                self.say(
                    chat_id,
                    t("prompt_interface_language", lang),
                    Some(&keyboards::interface_language()),
                )
                .await;
            }
            "/history" => {
                let records = self.history.recent(actor_id, 5).await;
                self.say(
                    chat_id,
                    &i18n::history(lang, &records),
                    Some(&keyboards::history(lang)),
                )
                .await;
            }
            "/clear_history" => {
                if let Err(e) = self.history.clear(actor_id).await {
                    warn!("failed to clear history for {actor_id}: {e}");
                }
                self.say(
                    chat_id,
                    t("history_cleared", lang),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
            }
            "/admin" | "/stats" | "/broadcast" | "/ban" | "/unban" => {
                if !self.is_admin(actor_id) {
                    // State deliberately untouched on denial.
                    self.say(chat_id, t("access_denied", lang), None).await;
                    return;
                }
                self.handle_admin_command(actor_id, chat_id, command).await;
            }
            _ => {
                self.say(chat_id, t("unknown_command", lang), None).await;
            }
        }
    }

    pub(super) async fn handle_admin_command(&self, actor_id: i64, chat_id: i64, command: &str) {
        let lang = self.ui_lang(actor_id).await;
        match command {
            "/admin" => {
                self.say(chat_id, t("admin_panel", lang), Some(&keyboards::admin_panel(lang)))
                    .await;
            }
            "/stats" => {
                let text = self.stats_text(lang).await;
                self.say(chat_id, &text, Some(&keyboards::back_to_main(lang)))
                    .await;
            }
            "/broadcast" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingBroadcastMessage)
                    .await;
                self.say(chat_id, t("prompt_broadcast", lang), Some(&keyboards::cancel(lang)))
                    .await;
            }
            "/ban" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingBanUserId)
                    .await;
                self.say(chat_id, t("prompt_ban_id", lang), Some(&keyboards::cancel(lang)))
                    .await;
            }
            "/unban" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingUnbanUserId)
                    .await;
                self.say(chat_id, t("prompt_unban_id", lang), Some(&keyboards::cancel(lang)))
                    .await;
            }
            other => {
                warn!("admin dispatch received unrouted command: {other}");
            }
        }
    }

    /// Translate text with the user's saved pair, record it, reply.
    pub(super) async fn translate_and_reply(&self, actor_id: i64, chat_id: i64, text: &str) {
        let settings = self.settings.get(actor_id).await;
        let lang = settings.language;

        match self
            .translator
            .translate(text, &settings.translate_source, &settings.translate_target)
            .await
        {
            Ok(translated) => {
                if let Err(e) = self
                    .history
                    .add(
                        actor_id,
                        text,
                        &translated,
                        &settings.translate_source,
                        &settings.translate_target,
                    )
                    .await
                {
                    warn!("failed to record history for {actor_id}: {e}");
                }
                self.say(chat_id, &translated, Some(&keyboards::after_translation(lang)))
                    .await;
            }
            Err(e) => {
                info!("translation failed for {actor_id}: {e}");
                self.say(
                    chat_id,
                    t("translation_failed", lang),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
            }
        }
    }

    /// Usage statistics summary.
    pub(super) async fn stats_text(&self, lang: UiLang) -> String {
        let users = self.history.user_ids().await.len().max(self.settings.count().await);
        let translations = self.history.total_records().await;
        let banned = self.bans.count().await;
        i18n::stats(lang, users, translations, banned)
    }
}
