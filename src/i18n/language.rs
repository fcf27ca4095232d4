//! Language metadata: names, switcher labels and OpenGraph locales.
//!
//! The site ships with English, Russian and Latvian. Codes loaded from
//! configuration that are not in the built-in table still work; they get
//! metadata derived from the code itself.

use serde::Serialize;

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageConfig {
    /// Short language code used as the URL prefix (e.g., "en", "lv")
    pub code: String,

    /// English name of the language (e.g., "Latvian")
    pub name: String,

    /// Native name shown in the language switcher (e.g., "Latviešu")
    pub native_name: String,

    /// Compact switcher label (e.g., "LV")
    pub label: String,

    /// OpenGraph locale (e.g., "lv_LV")
    pub og_locale: String,
}

impl LanguageConfig {
    /// Build a config from a code, using built-in metadata when the code is known.
    pub fn from_code(code: &str) -> Self {
        match BUILTIN_LANGUAGES.iter().find(|(c, ..)| *c == code) {
            Some((code, name, native_name, og_locale)) => Self {
                code: (*code).to_string(),
                name: (*name).to_string(),
                native_name: (*native_name).to_string(),
                label: code.to_uppercase(),
                og_locale: (*og_locale).to_string(),
            },
            None => Self {
                code: code.to_string(),
                name: code.to_string(),
                native_name: code.to_string(),
                label: code.to_uppercase(),
                og_locale: format!("{}_{}", code, code.to_uppercase()),
            },
        }
    }
}

/// Built-in language metadata: (code, name, native name, OpenGraph locale).
///
/// Order here is the site's switcher order.
pub(crate) const BUILTIN_LANGUAGES: [(&str, &str, &str, &str); 3] = [
    ("en", "English", "English", "en_US"),
    ("ru", "Russian", "Русский", "ru_RU"),
    ("lv", "Latvian", "Latviešu", "lv_LV"),
];
