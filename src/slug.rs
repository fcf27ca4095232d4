//! SEO-friendly article slugs.
//!
//! Slugs are 3-5 meaningful words from the English title, joined by hyphens.

use regex::Regex;
use std::sync::OnceLock;

/// Default number of words kept in a slug.
pub const DEFAULT_MAX_WORDS: usize = 5;

const STOPWORDS: [&str; 38] = [
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "all", "that", "this", "these", "those",
    "will", "has", "have", "had", "be", "been", "being", "is", "are", "was", "were", "its", "their",
];

// Cached patterns
static QUOTES_REGEX: OnceLock<Regex> = OnceLock::new();
static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();
static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();

fn quotes_regex() -> &'static Regex {
    QUOTES_REGEX.get_or_init(|| Regex::new(r#"['"‘’“”,]"#).expect("valid regex"))
}

fn punctuation_regex() -> &'static Regex {
    PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"[^0-9a-z_\s-]").expect("valid regex"))
}

fn slug_regex() -> &'static Regex {
    SLUG_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9-]+$").expect("valid regex"))
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Generate a slug from an English title.
///
/// # Example
/// ```ignore
/// let slug = generate_seo_slug("Riga Announces Revolutionary Urban Bee Network", 5);
/// assert_eq!(slug, "riga-announces-revolutionary-urban-bee");
/// ```
pub fn generate_seo_slug(title: &str, max_words: usize) -> String {
    let lowered = title.to_lowercase();
    let unquoted = quotes_regex().replace_all(&lowered, "");
    let spaced = punctuation_regex().replace_all(&unquoted, " ");

    spaced
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stopword(word))
        .take(max_words)
        .collect::<Vec<_>>()
        .join("-")
}

/// Check that a slug has 3 to 5 words of lowercase ASCII letters and digits.
pub fn is_valid_seo_slug(slug: &str) -> bool {
    let word_count = slug.split('-').count();
    (3..=5).contains(&word_count) && slug_regex().is_match(slug)
}
