//! Inline keyboard callback dispatch.

use super::Gateway;
use crate::fsm::ConversationState;
use crate::i18n::{self, t};
use crate::keyboards;
use polyglot_core::lang::UiLang;
use tracing::{info, warn};

impl Gateway {
    pub(super) async fn handle_callback(
        &self,
        actor_id: i64,
        chat_id: i64,
        message_id: i64,
        callback_id: &str,
        data: &str,
    ) {
        let lang = self.ui_lang(actor_id).await;

        if let Some(code) = data.strip_prefix("interface_") {
            self.pick_interface_language(actor_id, chat_id, message_id, callback_id, code)
                .await;
            return;
        }
        if let Some(code) = data.strip_prefix("target_") {
            self.pick_target_language(actor_id, chat_id, message_id, callback_id, code)
                .await;
            return;
        }
        if let Some(page) = data.strip_prefix("page_target_") {
            let page = page.parse::<usize>().unwrap_or(0);
            let languages = self.translator.languages().await;
            if let Err(e) = self
                .channel
                .edit_reply_markup(
                    chat_id,
                    message_id,
                    &keyboards::target_language_page(&languages, page, lang),
                )
                .await
            {
                warn!("failed to flip language page: {e}");
            }
            self.ack(callback_id, None, false).await;
            return;
        }

        match data {
            "noop" => {
                self.ack(callback_id, None, false).await;
            }
            "main_menu" => {
                // Unconditional escape from any state.
                self.conversations.clear(actor_id).await;
                self.revise(
                    chat_id,
                    message_id,
                    t("welcome", lang),
                    Some(&keyboards::main_menu(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "cancel" | "broadcast_cancel" | "ban_cancel" | "unban_cancel" => {
                self.conversations.clear(actor_id).await;
                self.revise(
                    chat_id,
                    message_id,
                    t("cancelled", lang),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "translate" | "translate_again" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingTranslationText)
                    .await;
                self.revise(
                    chat_id,
                    message_id,
                    t("prompt_translate", lang),
                    Some(&keyboards::cancel(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "help" => {
                self.revise(chat_id, message_id, t("help", lang), Some(&keyboards::help(lang)))
                    .await;
                self.ack(callback_id, None, false).await;
            }
            "about" => {
                self.revise(
                    chat_id,
                    message_id,
                    t("about", lang),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "history" => {
                let records = self.history.recent(actor_id, 5).await;
                self.revise(
                    chat_id,
                    message_id,
                    &i18n::history(lang, &records),
                    Some(&keyboards::history(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "clear_history" => {
                if let Err(e) = self.history.clear(actor_id).await {
                    warn!("failed to clear history for {actor_id}: {e}");
                }
                self.revise(
                    chat_id,
                    message_id,
                    t("history_cleared", lang),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "close" => {
                if let Err(e) = self.channel.delete_message(chat_id, message_id).await {
                    warn!("failed to delete message {message_id}: {e}");
                }
                self.ack(callback_id, None, false).await;
            }
            "setlanguage" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingInterfaceLanguage)
                    .await;
                self.revise(
                    chat_id,
                    message_id,
                    t("prompt_interface_language", lang),
                    Some(&keyboards::interface_language()),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "set_target_language" => {
                let languages = self.translator.languages().await;
                self.revise(
                    chat_id,
                    message_id,
                    t("pick_target_language", lang),
                    Some(&keyboards::target_language_page(&languages, 0, lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "admin_stats" | "admin_broadcast" | "admin_ban" | "admin_unban"
            | "admin_banned_list" | "broadcast_confirm" | "ban_confirm" | "unban_confirm" => {
                if !self.is_admin(actor_id) {
                    // State deliberately untouched on denial.
                    self.ack(callback_id, Some(t("access_denied", lang)), true).await;
                    return;
                }
                self.handle_admin_callback(actor_id, chat_id, message_id, callback_id, data)
                    .await;
            }
            other => {
                info!("unhandled callback data: {other}");
                self.ack(callback_id, None, false).await;
            }
        }
    }

    async fn pick_interface_language(
        &self,
        actor_id: i64,
        chat_id: i64,
        message_id: i64,
        callback_id: &str,
        code: &str,
    ) {
        let Some(new_lang) = UiLang::from_code(code) else {
            self.ack(callback_id, None, false).await;
            return;
        };
        if let Err(e) = self.settings.set_language(actor_id, new_lang).await {
            warn!("failed to save language for {actor_id}: {e}");
        }
        self.conversations.clear(actor_id).await;
        // Confirm in the freshly chosen language.
        self.revise(
            chat_id,
            message_id,
            t("language_saved", new_lang),
            Some(&keyboards::main_menu(new_lang)),
        )
        .await;
        self.ack(callback_id, None, false).await;
    }

    async fn pick_target_language(
        &self,
        actor_id: i64,
        chat_id: i64,
        message_id: i64,
        callback_id: &str,
        code: &str,
    ) {
        let lang = self.ui_lang(actor_id).await;
        if let Err(e) = self
            .settings
            .set_translate_languages(actor_id, "auto", code)
            .await
        {
            warn!("failed to save target language for {actor_id}: {e}");
        }
        self.revise(
            chat_id,
            message_id,
            &i18n::target_saved(lang, code),
            Some(&keyboards::main_menu(lang)),
        )
        .await;
        self.ack(callback_id, None, false).await;
    }

    pub(super) async fn handle_admin_callback(
        &self,
        actor_id: i64,
        chat_id: i64,
        message_id: i64,
        callback_id: &str,
        data: &str,
    ) {
        let lang = self.ui_lang(actor_id).await;
        match data {
            "admin_stats" => {
                let text = self.stats_text(lang).await;
                self.revise(chat_id, message_id, &text, Some(&keyboards::back_to_main(lang)))
                    .await;
                self.ack(callback_id, None, false).await;
            }
            "admin_banned_list" => {
                let ids = self.bans.list().await;
                self.revise(
                    chat_id,
                    message_id,
                    &i18n::banned_list(lang, &ids),
                    Some(&keyboards::back_to_main(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "admin_broadcast" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingBroadcastMessage)
                    .await;
                self.revise(
                    chat_id,
                    message_id,
                    t("prompt_broadcast", lang),
                    Some(&keyboards::cancel(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "admin_ban" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingBanUserId)
                    .await;
                self.revise(
                    chat_id,
                    message_id,
                    t("prompt_ban_id", lang),
                    Some(&keyboards::cancel(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "admin_unban" => {
                self.conversations
                    .set(actor_id, ConversationState::AwaitingUnbanUserId)
                    .await;
                self.revise(
                    chat_id,
                    message_id,
                    t("prompt_unban_id", lang),
                    Some(&keyboards::cancel(lang)),
                )
                .await;
                self.ack(callback_id, None, false).await;
            }
            "broadcast_confirm" => {
                match self.conversations.take(actor_id).await {
                    ConversationState::AwaitingBroadcastConfirmation { message } => {
                        self.revise(
                            chat_id,
                            message_id,
                            t("broadcast_started", lang),
                            Some(&keyboards::back_to_main(lang)),
                        )
                        .await;
                        self.ack(callback_id, None, false).await;
                        self.spawn_broadcast(actor_id, chat_id, message).await;
                    }
                    _ => {
                        self.ack(callback_id, Some(t("nothing_pending", lang)), false)
                            .await;
                    }
                }
            }
            "ban_confirm" => {
                match self.conversations.take(actor_id).await {
                    ConversationState::AwaitingBanConfirmation { target } => {
                        if let Err(e) = self.bans.ban(target).await {
                            warn!("failed to ban {target}: {e}");
                        }
                        info!("admin {actor_id} banned {target}");
                        self.revise(
                            chat_id,
                            message_id,
                            &i18n::ban_done(lang, target),
                            Some(&keyboards::back_to_main(lang)),
                        )
                        .await;
                        self.ack(callback_id, None, false).await;
                    }
                    _ => {
                        self.ack(callback_id, Some(t("nothing_pending", lang)), false)
                            .await;
                    }
                }
            }
            "unban_confirm" => {
                match self.conversations.take(actor_id).await {
                    ConversationState::AwaitingUnbanConfirmation { target } => {
                        if let Err(e) = self.bans.unban(target).await {
                            warn!("failed to unban {target}: {e}");
                        }
                        info!("admin {actor_id} unbanned {target}");
                        self.revise(
                            chat_id,
                            message_id,
                            &i18n::unban_done(lang, target),
                            Some(&keyboards::back_to_main(lang)),
                        )
                        .await;
                        self.ack(callback_id, None, false).await;
                    }
                    _ => {
                        self.ack(callback_id, Some(t("nothing_pending", lang)), false)
                            .await;
                    }
                }
            }
            other => {
                warn!("admin dispatch received unrouted callback: {other}");
                self.ack(callback_id, None, false).await;
            }
        }
    }
}
