//! Inline keyboard button labels.

use polyglot_core::lang::UiLang;

pub(super) fn lookup(key: &str, lang: UiLang) -> Option<&'static str> {
    let ru = lang == UiLang::Ru;
    let value = match key {
        "btn_translate" => {
            if ru {
                "🌐 Перевести"
            } else {
                "🌐 Translate"
            }
        }
        "btn_translate_again" => {
            if ru {
                "🔁 Перевести ещё"
            } else {
                "🔁 Translate again"
            }
        }
        "btn_target_language" => {
            if ru {
                "🗣 Язык перевода"
            } else {
                "🗣 Translation language"
            }
        }
        "btn_interface_language" => {
            if ru {
                "⚙️ Язык интерфейса"
            } else {
                "⚙️ Interface language"
            }
        }
        "btn_history" => {
            if ru {
                "📜 История"
            } else {
                "📜 History"
            }
        }
        "btn_clear_history" => {
            if ru {
                "🗑 Очистить историю"
            } else {
                "🗑 Clear history"
            }
        }
        "btn_help" => {
            if ru {
                "❓ Помощь"
            } else {
                "❓ Help"
            }
        }
        "btn_about" => {
            if ru {
                "ℹ️ О боте"
            } else {
                "ℹ️ About"
            }
        }
        "btn_main_menu" => {
            if ru {
                "🏠 Главное меню"
            } else {
                "🏠 Main menu"
            }
        }
        "btn_cancel" => {
            if ru {
                "✖️ Отмена"
            } else {
                "✖️ Cancel"
            }
        }
        "btn_close" => {
            if ru {
                "Закрыть"
            } else {
                "Close"
            }
        }
        "btn_confirm" => {
            if ru {
                "✅ Подтвердить"
            } else {
                "✅ Confirm"
            }
        }
        "btn_admin_stats" => {
            if ru {
                "📊 Статистика"
            } else {
                "📊 Stats"
            }
        }
        "btn_admin_broadcast" => {
            if ru {
                "📢 Рассылка"
            } else {
                "📢 Broadcast"
            }
        }
        "btn_admin_ban" => {
            if ru {
                "🚫 Заблокировать"
            } else {
                "🚫 Ban user"
            }
        }
        "btn_admin_unban" => {
            if ru {
                "♻️ Разблокировать"
            } else {
                "♻️ Unban user"
            }
        }
        "btn_admin_banned_list" => {
            if ru {
                "📋 Список банов"
            } else {
                "📋 Banned list"
            }
        }
        "btn_prev" => "⬅️",
        "btn_next" => "➡️",
        _ => return None,
    };
    Some(value)
}
