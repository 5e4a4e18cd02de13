// src/i18n/locale.rs
use super::TranslationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every language the console ships a translation table for.
///
/// The set is closed: code that holds a `Locale` can never carry an
/// unsupported language, so setters taking one need no runtime check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sk,
    De,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Sk, Locale::De];
    pub const COUNT: usize = 3;
    pub const DEFAULT: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sk => "sk",
            Locale::De => "de",
        }
    }

    /// Name of the language in that language.
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Sk => "Slovenčina",
            Locale::De => "Deutsch",
        }
    }

    /// Short label for compact language pickers.
    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Sk => "SK",
            Locale::De => "DE",
        }
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Lenient lookup used for persisted values: unknown input yields `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    pub fn available_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.code()).collect()
    }
}

impl FromStr for Locale {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| TranslationError::InvalidLanguage(s.trim().to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
        assert!(Locale::En.is_default());
        assert!(!Locale::De.is_default());
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("SK".parse::<Locale>(), Ok(Locale::Sk));
        assert_eq!(" de ".parse::<Locale>(), Ok(Locale::De));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(TranslationError::InvalidLanguage("fr".into()))
        );
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, locale) in Locale::ALL.iter().enumerate() {
            assert_eq!(locale.index(), i);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Sk).unwrap(), "\"sk\"");
        let parsed: Locale = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(parsed, Locale::De);
    }

    #[test]
    fn test_display_metadata() {
        assert_eq!(Locale::Sk.display_name(), "Slovenčina");
        assert_eq!(Locale::De.flag(), "DE");
        assert_eq!(Locale::En.to_string(), "en");
        assert_eq!(Locale::available_codes(), vec!["en", "sk", "de"]);
    }
}
