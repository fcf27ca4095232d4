//! Per-page alternates: canonical URL plus the language -> URL map.

use crate::seo::hreflang::{HreflangGenerator, HreflangTag};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// What a page embeds in its `<head>` for language alternates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageAlternates {
    /// The page's own URL in its own language
    pub canonical: String,

    /// `(code, url)` per supported language in registry order, fallback excluded
    #[serde(serialize_with = "serialize_ordered_map")]
    pub languages: Vec<(String, String)>,

    /// Search-engine fallback (default language URL)
    pub x_default: String,

    /// OpenGraph locale of the page language (e.g., "ru_RU")
    pub og_locale: String,
}

impl PageAlternates {
    /// Build alternates for `path` rendered in `lang`.
    ///
    /// Returns `None` when `lang` is not supported; templates treat that as
    /// not found.
    pub fn for_page(generator: &HreflangGenerator, lang: &str, path: &str) -> Option<Self> {
        let language = generator.registry().get_by_code(lang)?;

        let mut languages = Vec::with_capacity(generator.registry().len());
        let mut x_default = String::new();
        for link in generator.links(path) {
            match link.tag {
                HreflangTag::Language(code) => languages.push((code, link.href)),
                HreflangTag::XDefault => x_default = link.href,
            }
        }

        let canonical = languages
            .iter()
            .find(|(code, _)| code == lang)
            .map(|(_, url)| url.clone())?;

        Some(Self {
            canonical,
            languages,
            x_default,
            og_locale: language.og_locale.clone(),
        })
    }

    /// The alternate URL for one language code.
    pub fn url_for(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|(lang, _)| lang == code)
            .map(|(_, url)| url.as_str())
    }
}

/// Emit `(code, url)` pairs as a JSON object, keeping their order.
fn serialize_ordered_map<S>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (code, url) in pairs {
        map.serialize_entry(code, url)?;
    }
    map.end()
}
