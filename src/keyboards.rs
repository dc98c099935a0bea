//! Inline keyboard builders.

use crate::i18n::t;
use polyglot_core::{
    event::{InlineButton, InlineKeyboard},
    lang::UiLang,
};
use std::collections::BTreeMap;

/// Languages per page in the target-language picker.
pub const LANGS_PER_PAGE: usize = 8;
/// Languages per keyboard row in the picker.
pub const LANGS_PER_ROW: usize = 2;

pub fn main_menu(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![InlineButton::new(t("btn_translate", lang), "translate")],
        vec![
            InlineButton::new(t("btn_target_language", lang), "set_target_language"),
            InlineButton::new(t("btn_interface_language", lang), "setlanguage"),
        ],
        vec![
            InlineButton::new(t("btn_history", lang), "history"),
            InlineButton::new(t("btn_help", lang), "help"),
        ],
        vec![InlineButton::new(t("btn_about", lang), "about")],
    ])
}

pub fn help(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![InlineButton::new(t("btn_translate", lang), "translate")],
        vec![InlineButton::new(t("btn_main_menu", lang), "main_menu")],
    ])
}

pub fn after_translation(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![InlineButton::new(
            t("btn_translate_again", lang),
            "translate_again",
        )],
        vec![InlineButton::new(t("btn_main_menu", lang), "main_menu")],
    ])
}

pub fn history(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![InlineButton::new(
            t("btn_clear_history", lang),
            "clear_history",
        )],
        vec![
            InlineButton::new(t("btn_close", lang), "close"),
            InlineButton::new(t("btn_main_menu", lang), "main_menu"),
        ],
    ])
}

pub fn cancel(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![vec![InlineButton::new(t("btn_cancel", lang), "cancel")]])
}

pub fn back_to_main(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![vec![InlineButton::new(
        t("btn_main_menu", lang),
        "main_menu",
    )]])
}

/// Yes/no pair for a destructive action.
pub fn confirm(lang: UiLang, confirm_data: &str, cancel_data: &str) -> InlineKeyboard {
    InlineKeyboard::new(vec![vec![
        InlineButton::new(t("btn_confirm", lang), confirm_data),
        InlineButton::new(t("btn_cancel", lang), cancel_data),
    ]])
}

pub fn admin_panel(lang: UiLang) -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![
            InlineButton::new(t("btn_admin_stats", lang), "admin_stats"),
            InlineButton::new(t("btn_admin_broadcast", lang), "admin_broadcast"),
        ],
        vec![
            InlineButton::new(t("btn_admin_ban", lang), "admin_ban"),
            InlineButton::new(t("btn_admin_unban", lang), "admin_unban"),
        ],
        vec![InlineButton::new(
            t("btn_admin_banned_list", lang),
            "admin_banned_list",
        )],
        vec![InlineButton::new(t("btn_main_menu", lang), "main_menu")],
    ])
}

/// Interface language picker (the two supported UI locales).
pub fn interface_language() -> InlineKeyboard {
    let rows = UiLang::all()
        .iter()
        .map(|lang| {
            vec![InlineButton::new(
                lang.display_name(),
                format!("interface_{}", lang.code()),
            )]
        })
        .collect();
    InlineKeyboard::new(rows)
}

/// One page of the target-language picker.
///
/// Two buttons per row, eight languages per page, with a prev / indicator /
/// next navigation row and a main-menu row at the bottom. `page` is clamped
/// to the valid range.
pub fn target_language_page(
    languages: &BTreeMap<String, String>,
    page: usize,
    lang: UiLang,
) -> InlineKeyboard {
    let total_pages = page_count(languages.len());
    let page = page.min(total_pages.saturating_sub(1));

    let mut rows: Vec<Vec<InlineButton>> = Vec::new();
    let entries: Vec<(&String, &String)> = languages
        .iter()
        .skip(page * LANGS_PER_PAGE)
        .take(LANGS_PER_PAGE)
        .collect();

    for pair in entries.chunks(LANGS_PER_ROW) {
        rows.push(
            pair.iter()
                .map(|(code, name)| InlineButton::new(name.as_str(), format!("target_{code}")))
                .collect(),
        );
    }

    if total_pages > 1 {
        let mut nav = Vec::new();
        if page > 0 {
            nav.push(InlineButton::new(
                t("btn_prev", lang),
                format!("page_target_{}", page - 1),
            ));
        }
        nav.push(InlineButton::new(
            format!("{}/{total_pages}", page + 1),
            "noop",
        ));
        if page + 1 < total_pages {
            nav.push(InlineButton::new(
                t("btn_next", lang),
                format!("page_target_{}", page + 1),
            ));
        }
        rows.push(nav);
    }

    rows.push(vec![InlineButton::new(t("btn_main_menu", lang), "main_menu")]);
    InlineKeyboard::new(rows)
}

/// Number of pages the picker needs for `total` languages.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(LANGS_PER_PAGE).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(n: usize) -> BTreeMap<String, String> {
        (0..n)
            .map(|i| (format!("l{i:02}"), format!("Lang {i}")))
            .collect()
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(8), 1);
        assert_eq!(page_count(9), 2);
        assert_eq!(page_count(16), 2);
        assert_eq!(page_count(17), 3);
    }

    #[test]
    fn test_single_page_has_no_navigation() {
        let kb = target_language_page(&languages(6), 0, UiLang::En);
        // 6 languages = 3 rows of 2, plus the main-menu row.
        assert_eq!(kb.inline_keyboard.len(), 4);
        let all_data: Vec<&str> = kb
            .inline_keyboard
            .iter()
            .flatten()
            .map(|b| b.callback_data.as_str())
            .collect();
        assert!(!all_data.iter().any(|d| d.starts_with("page_target_")));
        assert!(all_data.contains(&"target_l00"));
        assert!(all_data.contains(&"main_menu"));
    }

    #[test]
    fn test_first_page_navigation() {
        let kb = target_language_page(&languages(20), 0, UiLang::En);
        let nav = &kb.inline_keyboard[kb.inline_keyboard.len() - 2];
        // No prev on the first page: indicator + next only.
        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].text, "1/3");
        assert_eq!(nav[0].callback_data, "noop");
        assert_eq!(nav[1].callback_data, "page_target_1");
    }

    #[test]
    fn test_middle_page_navigation() {
        let kb = target_language_page(&languages(20), 1, UiLang::En);
        let nav = &kb.inline_keyboard[kb.inline_keyboard.len() - 2];
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].callback_data, "page_target_0");
        assert_eq!(nav[1].text, "2/3");
        assert_eq!(nav[2].callback_data, "page_target_2");
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let kb = target_language_page(&languages(20), 2, UiLang::En);
        let lang_buttons: Vec<&InlineButton> = kb
            .inline_keyboard
            .iter()
            .flatten()
            .filter(|b| b.callback_data.starts_with("target_"))
            .collect();
        // 20 languages, pages of 8: the last page has 4.
        assert_eq!(lang_buttons.len(), 4);
        let nav = &kb.inline_keyboard[kb.inline_keyboard.len() - 2];
        assert_eq!(nav.len(), 2); // prev + indicator, no next
        assert_eq!(nav[1].text, "3/3");
    }

    #[test]
    fn test_out_of_range_page_clamped() {
        let kb = target_language_page(&languages(20), 99, UiLang::En);
        let nav = &kb.inline_keyboard[kb.inline_keyboard.len() - 2];
        assert_eq!(nav[1].text, "3/3");
    }

    #[test]
    fn test_interface_language_covers_all_ui_locales() {
        let kb = interface_language();
        assert_eq!(kb.inline_keyboard.len(), UiLang::all().len());
        let data: Vec<&str> = kb
            .inline_keyboard
            .iter()
            .flatten()
            .map(|b| b.callback_data.as_str())
            .collect();
        assert!(data.contains(&"interface_en"));
        assert!(data.contains(&"interface_ru"));
    }
}
