//! Language registry: the supported language set and the default language.
//!
//! The registry is an explicit immutable value built once at startup and
//! handed to whatever needs it. Construction validates every invariant, so a
//! bad language list fails the process before the first request instead of
//! producing odd redirects later.

use crate::i18n::language::{LanguageConfig, BUILTIN_LANGUAGES};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Reasons a language set is rejected at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("language set is empty")]
    Empty,

    #[error("invalid language code '{0}': expected 2-3 lowercase ASCII letters")]
    InvalidCode(String),

    #[error("language code '{0}' is listed more than once")]
    Duplicate(String),

    #[error("default language '{0}' is not in the supported language set")]
    UnknownDefault(String),
}

/// The ordered set of supported languages plus the default language.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    default_index: usize,
}

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn code_regex() -> &'static Regex {
    CODE_REGEX.get_or_init(|| Regex::new(r"^[a-z]{2,3}$").expect("valid regex"))
}

impl LanguageRegistry {
    /// Create a registry from language configs in their fixed iteration order.
    ///
    /// # Errors
    /// Returns a `RegistryError` when the set is empty, a code is malformed or
    /// duplicated, or `default_code` is not one of the languages.
    pub fn new(languages: Vec<LanguageConfig>, default_code: &str) -> Result<Self, RegistryError> {
        if languages.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (index, language) in languages.iter().enumerate() {
            if !code_regex().is_match(&language.code) {
                return Err(RegistryError::InvalidCode(language.code.clone()));
            }
            if languages[..index].iter().any(|l| l.code == language.code) {
                return Err(RegistryError::Duplicate(language.code.clone()));
            }
        }

        let default_index = languages
            .iter()
            .position(|l| l.code == default_code)
            .ok_or_else(|| RegistryError::UnknownDefault(default_code.to_string()))?;

        Ok(Self {
            languages,
            default_index,
        })
    }

    /// Create a registry from bare codes, filling in metadata per code.
    pub fn from_codes<S: AsRef<str>>(codes: &[S], default_code: &str) -> Result<Self, RegistryError> {
        let languages = codes
            .iter()
            .map(|code| LanguageConfig::from_code(code.as_ref()))
            .collect();
        Self::new(languages, default_code)
    }

    /// The site's own language set: English (default), Russian, Latvian.
    pub fn builtin() -> Self {
        let codes: Vec<&str> = BUILTIN_LANGUAGES.iter().map(|(code, ..)| *code).collect();
        Self::from_codes(codes.as_slice(), "en").expect("built-in language set is valid")
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a code belongs to the supported set.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All languages in their fixed iteration order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// All codes in their fixed iteration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|lang| lang.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn default_language(&self) -> &LanguageConfig {
        &self.languages[self.default_index]
    }

    /// The language a path is written in, or the default when unprefixed.
    pub fn language_from_path(&self, path: &str) -> &LanguageConfig {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| self.get_by_code(segment))
            .unwrap_or_else(|| self.default_language())
    }

    /// Build a site-relative link to `href` in the given language.
    ///
    /// Every language, including the default, gets an explicit prefix.
    pub fn localized_href(&self, href: &str, lang: &str) -> String {
        let clean = href.strip_prefix('/').unwrap_or(href);
        format!("/{}/{}", lang, clean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_builtin_order_and_default() {
        let registry = LanguageRegistry::builtin();
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["en", "ru", "lv"]);
        assert_eq!(registry.default_language().code, "en");
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_from_codes_custom_default() {
        let registry = LanguageRegistry::from_codes(&["lv", "en"], "lv").unwrap();
        assert_eq!(registry.default_language().code, "lv");
        assert_eq!(registry.list()[1].code, "en");
    }

    #[test]
    fn test_empty_set_rejected() {
        let codes: [&str; 0] = [];
        let result = LanguageRegistry::from_codes(&codes, "en");
        assert_eq!(result.unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = LanguageRegistry::from_codes(&["en", "ru", "en"], "en");
        assert_eq!(result.unwrap_err(), RegistryError::Duplicate("en".to_string()));
    }

    #[test]
    fn test_invalid_code_rejected() {
        for bad in ["EN", "e", "english", "e1", ""] {
            let result = LanguageRegistry::from_codes(&["en", bad], "en");
            assert_eq!(
                result.unwrap_err(),
                RegistryError::InvalidCode(bad.to_string()),
                "code {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_unknown_default_rejected() {
        let result = LanguageRegistry::from_codes(&["en", "ru"], "lv");
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnknownDefault("lv".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RegistryError::Empty.to_string(), "language set is empty");
        assert!(RegistryError::UnknownDefault("de".to_string())
            .to_string()
            .contains("'de'"));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.get_by_code("ru").unwrap().native_name, "Русский");
        assert!(registry.get_by_code("de").is_none());
        assert!(registry.is_supported("lv"));
        assert!(!registry.is_supported("LV"));
    }

    #[test]
    fn test_language_from_path() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.language_from_path("/ru/news/x").code, "ru");
        assert_eq!(registry.language_from_path("/lv").code, "lv");
        assert_eq!(registry.language_from_path("/news/x").code, "en");
        assert_eq!(registry.language_from_path("/").code, "en");
        assert_eq!(registry.language_from_path("").code, "en");
    }

    #[test]
    fn test_localized_href() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.localized_href("/culture/", "ru"), "/ru/culture/");
        assert_eq!(registry.localized_href("news/x", "en"), "/en/news/x");
        assert_eq!(registry.localized_href("", "lv"), "/lv/");
    }
}
