//! Internationalization (i18n) module for the site's language set.
//!
//! # Architecture
//!
//! - `registry`: The supported languages and the default, validated at load time
//! - `language`: Per-language metadata (names, labels, OpenGraph locales)
//!
//! # Example
//!
//! ```rust,ignore
//! use jurmola_telegraphs::i18n::LanguageRegistry;
//!
//! let registry = LanguageRegistry::from_codes(&["en", "ru", "lv"], "en")?;
//! assert_eq!(registry.default_language().code, "en");
//! ```

mod language;
mod registry;

pub use language::LanguageConfig;
pub use registry::{LanguageRegistry, RegistryError};
