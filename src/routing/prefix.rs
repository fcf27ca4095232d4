//! Language prefix detection and stripping.
//!
//! Shared by the request pipeline and the hreflang generator, so both agree
//! on what counts as "already localized".

use crate::i18n::LanguageRegistry;

/// Ensure a path starts with `/`; the empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Split off the first non-empty segment: `"//ru/news/"` -> `("ru", "news/")`.
fn first_segment(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_once('/').unwrap_or((trimmed, "")))
}

/// True when the first non-empty segment is a supported language code.
pub fn has_language_prefix(registry: &LanguageRegistry, path: &str) -> bool {
    first_segment(path).is_some_and(|(segment, _)| registry.is_supported(segment))
}

/// Remove a leading language segment, keeping the remainder verbatim.
///
/// `/ru/culture/` -> `/culture/`, `/ru` -> `/`, `/news/x` -> `/news/x`.
/// Unprefixed paths come back normalized to start with `/`.
pub fn strip_language_prefix(registry: &LanguageRegistry, path: &str) -> String {
    match first_segment(path) {
        Some((segment, rest)) if registry.is_supported(segment) => format!("/{}", rest),
        _ => normalize_path(path),
    }
}

/// Put `lang` in front of a path: `("/news/x", "ru")` -> `/ru/news/x`.
pub fn prepend_language_prefix(path: &str, lang: &str) -> String {
    format!("/{}{}", lang, normalize_path(path))
}
