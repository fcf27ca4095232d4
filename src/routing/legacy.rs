//! Legacy URL migrations: the fixed redirect table and `?lang=` queries.

use crate::i18n::LanguageRegistry;
use crate::routing::resolver::RedirectKind;

/// One exact-match redirect rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    pub kind: RedirectKind,
}

impl RedirectRule {
    pub fn permanent(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: RedirectKind::Permanent,
        }
    }
}

/// Ordered table of literal path redirects, checked before the general rules.
#[derive(Debug, Clone, Default)]
pub struct LegacyRedirects {
    rules: Vec<RedirectRule>,
}

/// Article slugs renamed in the January 2026 SEO pass.
const RENAMED_ARTICLES: [(&str, &str); 2] = [
    (
        "latvian-capital-to-introduce-mandatory-walk",
        "riga-mandatory-snail-work-day",
    ),
    (
        "riga-announces-revolutionary-urban-bee-network",
        "riga-urban-bee-transportation",
    ),
];

/// Category pages that used to live at the site root.
const BARE_CATEGORIES: [&str; 4] = ["politics", "culture", "business", "opinion"];

impl LegacyRedirects {
    pub fn new(rules: Vec<RedirectRule>) -> Self {
        Self { rules }
    }

    /// The site's historic redirects, targeting the default language.
    pub fn site_defaults(default_lang: &str) -> Self {
        let articles = RENAMED_ARTICLES.iter().map(|(old, new)| {
            RedirectRule::permanent(
                format!("/news/{}", old),
                format!("/{}/news/{}", default_lang, new),
            )
        });
        let categories = BARE_CATEGORIES.iter().map(|category| {
            RedirectRule::permanent(
                format!("/{}", category),
                format!("/{}/{}/", default_lang, category),
            )
        });

        Self {
            rules: articles.chain(categories).collect(),
        }
    }

    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// First rule whose source equals `path` exactly.
    pub fn lookup(&self, path: &str) -> Option<&RedirectRule> {
        self.rules.iter().find(|rule| rule.from == path)
    }
}

/// Convert an old `?lang=xx` URL into its path-prefixed form.
///
/// Only the first `lang` pair counts. The code is prepended as-is, even when
/// the path already carries a prefix: `/en/foo?lang=ru` becomes `/ru/en/foo`.
/// Unsupported codes are ignored.
pub fn migrate_query(
    registry: &LanguageRegistry,
    path: &str,
    query: &[(String, String)],
) -> Option<String> {
    let (_, lang) = query.iter().find(|(key, _)| key == "lang")?;
    if !registry.is_supported(lang) {
        return None;
    }
    Some(format!("/{}{}", lang, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== Redirect Table Tests ====================

    #[test]
    fn test_site_defaults_contains_six_rules() {
        let table = LegacyRedirects::site_defaults("en");
        assert_eq!(table.rules().len(), 6);
        assert!(table.rules().iter().all(|r| r.kind == RedirectKind::Permanent));
    }

    #[test]
    fn test_renamed_article_lookup() {
        let table = LegacyRedirects::site_defaults("en");
        let rule = table
            .lookup("/news/latvian-capital-to-introduce-mandatory-walk")
            .unwrap();
        assert_eq!(rule.to, "/en/news/riga-mandatory-snail-work-day");

        let rule = table
            .lookup("/news/riga-announces-revolutionary-urban-bee-network")
            .unwrap();
        assert_eq!(rule.to, "/en/news/riga-urban-bee-transportation");
    }

    #[test]
    fn test_bare_category_lookup() {
        let table = LegacyRedirects::site_defaults("en");
        assert_eq!(table.lookup("/politics").unwrap().to, "/en/politics/");
        assert_eq!(table.lookup("/culture").unwrap().to, "/en/culture/");
        assert_eq!(table.lookup("/business").unwrap().to, "/en/business/");
        assert_eq!(table.lookup("/opinion").unwrap().to, "/en/opinion/");
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = LegacyRedirects::site_defaults("en");
        assert!(table.lookup("/politics/").is_none());
        assert!(table.lookup("/politics/x").is_none());
        assert!(table.lookup("/en/politics").is_none());
    }

    #[test]
    fn test_site_defaults_follow_default_language() {
        let table = LegacyRedirects::site_defaults("lv");
        assert_eq!(table.lookup("/opinion").unwrap().to, "/lv/opinion/");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let table = LegacyRedirects::new(vec![
            RedirectRule::permanent("/old", "/en/first"),
            RedirectRule::permanent("/old", "/en/second"),
        ]);
        assert_eq!(table.lookup("/old").unwrap().to, "/en/first");
    }

    // ==================== Query Migration Tests ====================

    #[test]
    fn test_migrate_root_query() {
        let registry = LanguageRegistry::builtin();
        let target = migrate_query(&registry, "/", &query(&[("lang", "ru")]));
        assert_eq!(target.as_deref(), Some("/ru/"));
    }

    #[test]
    fn test_migrate_article_query() {
        let registry = LanguageRegistry::builtin();
        let target = migrate_query(&registry, "/news/article-slug", &query(&[("lang", "lv")]));
        assert_eq!(target.as_deref(), Some("/lv/news/article-slug"));
    }

    #[test]
    fn test_migrate_double_prefixes_existing_language() {
        let registry = LanguageRegistry::builtin();
        let target = migrate_query(&registry, "/en/foo", &query(&[("lang", "ru")]));
        assert_eq!(target.as_deref(), Some("/ru/en/foo"));
    }

    #[test]
    fn test_migrate_ignores_unsupported_or_missing() {
        let registry = LanguageRegistry::builtin();
        assert!(migrate_query(&registry, "/", &query(&[("lang", "de")])).is_none());
        assert!(migrate_query(&registry, "/", &query(&[("lang", "")])).is_none());
        assert!(migrate_query(&registry, "/", &query(&[("page", "2")])).is_none());
        assert!(migrate_query(&registry, "/", &[]).is_none());
    }

    #[test]
    fn test_migrate_uses_first_lang_pair() {
        let registry = LanguageRegistry::builtin();
        let target = migrate_query(
            &registry,
            "/news/x",
            &query(&[("lang", "ru"), ("lang", "de")]),
        );
        assert_eq!(target.as_deref(), Some("/ru/news/x"));

        // An unsupported first value is not rescued by a later one
        let target = migrate_query(
            &registry,
            "/news/x",
            &query(&[("page", "2"), ("lang", "de"), ("lang", "ru")]),
        );
        assert!(target.is_none());
    }
}
