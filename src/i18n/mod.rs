//! Internationalization — localized strings for bot responses.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format_*()` helpers for strings with interpolation.
//! Interface languages: English (fallback) and Russian.

mod buttons;
mod format;
mod labels;

#[cfg(test)]
mod tests;

pub use format::*;

use polyglot_core::lang::UiLang;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unknown keys.
pub fn t(key: &str, lang: UiLang) -> &'static str {
    if let Some(v) = labels::lookup(key, lang) {
        return v;
    }
    if let Some(v) = buttons::lookup(key, lang) {
        return v;
    }
    "???"
}
