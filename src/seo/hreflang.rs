//! Hreflang link generation.
//!
//! For any page path, produces one absolute URL per supported language plus
//! an `x-default` entry aliasing the default language.

use crate::i18n::LanguageRegistry;
use crate::routing::strip_language_prefix;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Tag of a hreflang entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HreflangTag {
    Language(String),
    XDefault,
}

impl HreflangTag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Language(code) => code,
            Self::XDefault => "x-default",
        }
    }
}

impl fmt::Display for HreflangTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HreflangTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub tag: HreflangTag,
    pub href: String,
}

/// Builds hreflang links against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HreflangGenerator {
    registry: Arc<LanguageRegistry>,
    base_url: String,
}

impl HreflangGenerator {
    /// `base_url` is used without its trailing slash.
    pub fn new(registry: Arc<LanguageRegistry>, base_url: &str) -> Self {
        Self {
            registry,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `base_path` in one language.
    pub fn url_for(&self, lang: &str, base_path: &str) -> String {
        format!("{}/{}{}", self.base_url, lang, base_path)
    }

    /// All hreflang links for `path`, which may or may not carry a prefix.
    ///
    /// Always `languages + 1` entries: one per language in registry order,
    /// then `x-default` with the default language's URL.
    pub fn links(&self, path: &str) -> Vec<HreflangLink> {
        let base_path = strip_language_prefix(&self.registry, path);

        let mut links: Vec<HreflangLink> = self
            .registry
            .codes()
            .map(|code| HreflangLink {
                tag: HreflangTag::Language(code.to_string()),
                href: self.url_for(code, &base_path),
            })
            .collect();

        links.push(HreflangLink {
            tag: HreflangTag::XDefault,
            href: self.url_for(&self.registry.default_language().code, &base_path),
        });

        links
    }
}
