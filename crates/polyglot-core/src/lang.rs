use serde::{Deserialize, Serialize};

/// Interface language for bot messages.
///
/// This is the language the bot *speaks* to the user, distinct from the
/// translation target (which may be any code the API supports).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLang {
    /// English (default and fallback).
    #[default]
    En,
    /// Russian.
    Ru,
}

impl UiLang {
    /// Parse an interface-language code. Unknown codes map to `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            _ => None,
        }
    }

    /// Pick an interface language from a Telegram `language_code` hint
    /// (e.g. "ru", "ru-RU", "en-US"). Anything that isn't Russian is English.
    pub fn from_declared_locale(locale: &str) -> Self {
        if locale.starts_with("ru") {
            Self::Ru
        } else {
            Self::En
        }
    }

    /// The two-letter code used in callback data and persisted settings.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Native display name, as shown on the language picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
        }
    }

    /// All interface languages offered by the picker.
    pub fn all() -> &'static [UiLang] {
        &[UiLang::En, UiLang::Ru]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(UiLang::from_code("en"), Some(UiLang::En));
        assert_eq!(UiLang::from_code("ru"), Some(UiLang::Ru));
        assert_eq!(UiLang::from_code("xx"), None);
    }

    #[test]
    fn test_from_declared_locale() {
        assert_eq!(UiLang::from_declared_locale("ru"), UiLang::Ru);
        assert_eq!(UiLang::from_declared_locale("ru-RU"), UiLang::Ru);
        assert_eq!(UiLang::from_declared_locale("en-US"), UiLang::En);
        assert_eq!(UiLang::from_declared_locale("de"), UiLang::En);
        assert_eq!(UiLang::from_declared_locale(""), UiLang::En);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&UiLang::Ru).unwrap();
        assert_eq!(json, "\"ru\"");
        let back: UiLang = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UiLang::Ru);
    }
}
