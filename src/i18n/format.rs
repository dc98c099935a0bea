//! Format helpers for strings with interpolation.

use super::t;
use polyglot_core::lang::UiLang;
use polyglot_storage::history::HistoryRecord;

/// Rate-limit denial with remaining wait, one decimal place.
pub fn rate_limited(lang: UiLang, retry_after_secs: f64) -> String {
    match lang {
        UiLang::Ru => format!("Слишком часто. Подождите {retry_after_secs:.1} сек."),
        UiLang::En => format!("Too many requests. Wait {retry_after_secs:.1} s."),
    }
}

/// The translation target language confirmation.
pub fn target_saved(lang: UiLang, code: &str) -> String {
    match lang {
        UiLang::Ru => format!("Язык перевода сохранён: {code}"),
        UiLang::En => format!("Translation language saved: {code}"),
    }
}

/// A numbered listing of recent history records.
pub fn history(lang: UiLang, records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return t("history_empty", lang).to_string();
    }
    let mut out = t("history_title", lang).to_string();
    for (i, rec) in records.iter().enumerate() {
        out.push_str(&format!(
            "\n\n{}. [{} → {}] {}\n→ {}",
            i + 1,
            rec.from_lang,
            rec.to_lang,
            rec.original,
            rec.translated
        ));
    }
    out
}

/// Usage statistics for the admin panel.
pub fn stats(lang: UiLang, users: usize, translations: usize, banned: usize) -> String {
    match lang {
        UiLang::Ru => format!(
            "Статистика:\n\nПользователей: {users}\nПереводов в истории: {translations}\nЗаблокировано: {banned}"
        ),
        UiLang::En => format!(
            "Statistics:\n\nUsers: {users}\nTranslations on record: {translations}\nBanned: {banned}"
        ),
    }
}

/// Broadcast preview shown before confirmation.
pub fn broadcast_preview(lang: UiLang, message: &str) -> String {
    match lang {
        UiLang::Ru => format!("Отправить всем пользователям?\n\n{message}"),
        UiLang::En => format!("Send this to all users?\n\n{message}"),
    }
}

/// Broadcast fan-out result.
pub fn broadcast_result(lang: UiLang, success: usize, errors: usize) -> String {
    match lang {
        UiLang::Ru => format!("Рассылка завершена.\nДоставлено: {success}\nОшибок: {errors}"),
        UiLang::En => format!("Broadcast finished.\nDelivered: {success}\nErrors: {errors}"),
    }
}

/// Ban confirmation prompt.
pub fn ban_confirm_prompt(lang: UiLang, target: i64) -> String {
    match lang {
        UiLang::Ru => format!("Заблокировать пользователя {target}?"),
        UiLang::En => format!("Ban user {target}?"),
    }
}

/// Unban confirmation prompt.
pub fn unban_confirm_prompt(lang: UiLang, target: i64) -> String {
    match lang {
        UiLang::Ru => format!("Разблокировать пользователя {target}?"),
        UiLang::En => format!("Unban user {target}?"),
    }
}

/// Ban applied confirmation.
pub fn ban_done(lang: UiLang, target: i64) -> String {
    match lang {
        UiLang::Ru => format!("Пользователь {target} заблокирован."),
        UiLang::En => format!("User {target} has been banned."),
    }
}

/// Unban applied confirmation.
pub fn unban_done(lang: UiLang, target: i64) -> String {
    match lang {
        UiLang::Ru => format!("Пользователь {target} разблокирован."),
        UiLang::En => format!("User {target} has been unbanned."),
    }
}

/// The banned users listing.
pub fn banned_list(lang: UiLang, ids: &[i64]) -> String {
    if ids.is_empty() {
        return t("banned_list_empty", lang).to_string();
    }
    let mut out = t("banned_list_title", lang).to_string();
    for id in ids {
        out.push_str(&format!("\n• {id}"));
    }
    out
}
