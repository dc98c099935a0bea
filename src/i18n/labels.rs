//! Static message strings.

use polyglot_core::lang::UiLang;

pub(super) fn lookup(key: &str, lang: UiLang) -> Option<&'static str> {
    let ru = lang == UiLang::Ru;
    let value = match key {
        "welcome" => {
            if ru {
                "Привет! Я бот-переводчик.\n\nОтправьте мне текст, и я переведу его, или выберите действие ниже."
            } else {
                "Hi! I am a translation bot.\n\nSend me any text and I will translate it, or pick an action below."
            }
        }
        "help" => {
            if ru {
                "Как пользоваться ботом:\n\n/translate — перевести сообщение\n/setlanguage — язык интерфейса\n/history — последние переводы\n/clear_history — очистить историю\n\nЛюбой текст без команды переводится автоматически."
            } else {
                "How to use the bot:\n\n/translate — translate a message\n/setlanguage — interface language\n/history — your recent translations\n/clear_history — clear your history\n\nAny plain text is translated automatically."
            }
        }
        "about" => {
            if ru {
                "Бот-переводчик. Переводит текст между десятками языков через внешний сервис перевода."
            } else {
                "A translation bot. Translates text between dozens of languages via an external translation service."
            }
        }
        "prompt_translate" => {
            if ru {
                "Отправьте текст для перевода:"
            } else {
                "Send the text to translate:"
            }
        }
        "prompt_interface_language" => {
            if ru {
                "Выберите язык интерфейса:"
            } else {
                "Choose the interface language:"
            }
        }
        "language_saved" => {
            if ru {
                "Язык интерфейса сохранён."
            } else {
                "Interface language saved."
            }
        }
        "pick_target_language" => {
            if ru {
                "Выберите язык перевода:"
            } else {
                "Choose the translation language:"
            }
        }
        "translation_failed" => {
            if ru {
                "Не удалось перевести. Попробуйте ещё раз позже."
            } else {
                "Translation failed. Please try again later."
            }
        }
        "history_empty" => {
            if ru {
                "История переводов пуста."
            } else {
                "Your translation history is empty."
            }
        }
        "history_title" => {
            if ru {
                "Последние переводы:"
            } else {
                "Your recent translations:"
            }
        }
        "history_cleared" => {
            if ru {
                "История переводов очищена."
            } else {
                "Translation history cleared."
            }
        }
        "cancelled" => {
            if ru {
                "Действие отменено."
            } else {
                "Action cancelled."
            }
        }
        "access_denied" => {
            if ru {
                "Эта команда доступна только администраторам."
            } else {
                "This command is for administrators only."
            }
        }
        "unknown_command" => {
            if ru {
                "Неизвестная команда. Отправьте /help для списка команд."
            } else {
                "Unknown command. Send /help for the list of commands."
            }
        }
        // Shown to banned users regardless of their saved language.
        "banned_notice" => {
            "You are banned from using this bot.\nВы заблокированы и не можете пользоваться этим ботом."
        }
        "admin_panel" => {
            if ru {
                "Панель администратора:"
            } else {
                "Admin panel:"
            }
        }
        "prompt_broadcast" => {
            if ru {
                "Отправьте сообщение для рассылки всем пользователям:"
            } else {
                "Send the message to broadcast to all users:"
            }
        }
        "broadcast_started" => {
            if ru {
                "Рассылка запущена."
            } else {
                "Broadcast started."
            }
        }
        "prompt_ban_id" => {
            if ru {
                "Отправьте ID пользователя для блокировки:"
            } else {
                "Send the user ID to ban:"
            }
        }
        "prompt_unban_id" => {
            if ru {
                "Отправьте ID пользователя для разблокировки:"
            } else {
                "Send the user ID to unban:"
            }
        }
        "invalid_user_id" => {
            if ru {
                "Это не похоже на ID пользователя. Отправьте число."
            } else {
                "That does not look like a user ID. Send a number."
            }
        }
        "cannot_ban_self" => {
            if ru {
                "Нельзя заблокировать самого себя."
            } else {
                "You cannot ban yourself."
            }
        }
        "already_banned" => {
            if ru {
                "Этот пользователь уже заблокирован."
            } else {
                "This user is already banned."
            }
        }
        "not_banned" => {
            if ru {
                "Этот пользователь не заблокирован."
            } else {
                "This user is not banned."
            }
        }
        "banned_list_empty" => {
            if ru {
                "Список заблокированных пуст."
            } else {
                "The banned list is empty."
            }
        }
        "banned_list_title" => {
            if ru {
                "Заблокированные пользователи:"
            } else {
                "Banned users:"
            }
        }
        "use_buttons" => {
            if ru {
                "Пожалуйста, используйте кнопки ниже."
            } else {
                "Please use the buttons below."
            }
        }
        "nothing_pending" => {
            if ru {
                "Нет ожидающего действия."
            } else {
                "There is no pending action."
            }
        }
        _ => return None,
    };
    Some(value)
}
