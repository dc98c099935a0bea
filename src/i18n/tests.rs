use super::*;
use polyglot_core::lang::UiLang;
use polyglot_storage::history::HistoryRecord;

#[test]
fn test_all_keys_localized_in_both_languages() {
    let keys = [
        "welcome",
        "help",
        "about",
        "prompt_translate",
        "prompt_interface_language",
        "language_saved",
        "pick_target_language",
        "translation_failed",
        "history_empty",
        "history_title",
        "history_cleared",
        "cancelled",
        "access_denied",
        "unknown_command",
        "banned_notice",
        "admin_panel",
        "prompt_broadcast",
        "broadcast_started",
        "prompt_ban_id",
        "prompt_unban_id",
        "invalid_user_id",
        "cannot_ban_self",
        "already_banned",
        "not_banned",
        "banned_list_empty",
        "banned_list_title",
        "use_buttons",
        "nothing_pending",
        "btn_translate",
        "btn_translate_again",
        "btn_target_language",
        "btn_interface_language",
        "btn_history",
        "btn_clear_history",
        "btn_help",
        "btn_about",
        "btn_main_menu",
        "btn_cancel",
        "btn_close",
        "btn_confirm",
        "btn_admin_stats",
        "btn_admin_broadcast",
        "btn_admin_ban",
        "btn_admin_unban",
        "btn_admin_banned_list",
        "btn_prev",
        "btn_next",
    ];
    for key in keys {
        assert_ne!(t(key, UiLang::En), "???", "missing English for {key}");
        assert_ne!(t(key, UiLang::Ru), "???", "missing Russian for {key}");
    }
}

#[test]
fn test_unknown_key_falls_back() {
    assert_eq!(t("definitely_not_a_key", UiLang::En), "???");
}

#[test]
fn test_banned_notice_is_bilingual() {
    let en = t("banned_notice", UiLang::En);
    let ru = t("banned_notice", UiLang::Ru);
    assert_eq!(en, ru);
    assert!(en.contains("banned"));
    assert!(en.contains("заблокированы"));
}

#[test]
fn test_rate_limited_one_decimal() {
    let msg = rate_limited(UiLang::En, 1.2345);
    assert!(msg.contains("1.2"), "got: {msg}");
    assert!(!msg.contains("1.23"));

    let msg = rate_limited(UiLang::Ru, 0.04);
    assert!(msg.contains("0.0"), "got: {msg}");
}

#[test]
fn test_history_listing() {
    let records = vec![
        HistoryRecord {
            original: "hello".to_string(),
            translated: "привет".to_string(),
            from_lang: "auto".to_string(),
            to_lang: "ru".to_string(),
            timestamp: chrono::Utc::now(),
        },
        HistoryRecord {
            original: "world".to_string(),
            translated: "мир".to_string(),
            from_lang: "en".to_string(),
            to_lang: "ru".to_string(),
            timestamp: chrono::Utc::now(),
        },
    ];
    let out = history(UiLang::En, &records);
    assert!(out.contains("1. [auto → ru] hello"));
    assert!(out.contains("2. [en → ru] world"));
    assert!(out.contains("→ привет"));
}

#[test]
fn test_history_empty() {
    assert_eq!(history(UiLang::En, &[]), t("history_empty", UiLang::En));
    assert_eq!(history(UiLang::Ru, &[]), t("history_empty", UiLang::Ru));
}

#[test]
fn test_broadcast_result_counts() {
    let out = broadcast_result(UiLang::En, 2, 1);
    assert!(out.contains("Delivered: 2"));
    assert!(out.contains("Errors: 1"));
}

#[test]
fn test_banned_list_formats_ids() {
    let out = banned_list(UiLang::En, &[7, 42]);
    assert!(out.contains("• 7"));
    assert!(out.contains("• 42"));
    assert_eq!(
        banned_list(UiLang::Ru, &[]),
        t("banned_list_empty", UiLang::Ru)
    );
}
