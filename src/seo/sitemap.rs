//! Sitemap generation.
//!
//! Same per-language fan-out as the hreflang links, materialized for every
//! known page at once.

use crate::catalog::{ArticleIndex, CATEGORIES};
use crate::seo::hreflang::{HreflangGenerator, HreflangTag};
use chrono::{DateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// (language code, URL) pairs in registry order; empty for feeds
    pub alternates: Vec<(String, String)>,
}

/// Enumerate every page of the site in every language.
///
/// Order: home pages, categories, articles, then per-language feeds.
pub fn build_sitemap(
    generator: &HreflangGenerator,
    articles: &ArticleIndex,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();

    fan_out(&mut entries, generator, "/", now, ChangeFrequency::Daily, 1.0);

    for category in CATEGORIES {
        let path = format!("/{}/", category);
        fan_out(&mut entries, generator, &path, now, ChangeFrequency::Daily, 0.9);
    }

    for article in articles.articles() {
        let path = format!("/news/{}", article.slug);
        let published = Utc.from_utc_datetime(&article.date.and_time(NaiveTime::default()));
        fan_out(
            &mut entries,
            generator,
            &path,
            published,
            ChangeFrequency::Weekly,
            0.8,
        );
    }

    for code in generator.registry().codes() {
        entries.push(SitemapEntry {
            url: format!("{}/feed.xml?lang={}", generator.base_url(), code),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.5,
            alternates: Vec::new(),
        });
    }

    entries
}

fn fan_out(
    entries: &mut Vec<SitemapEntry>,
    generator: &HreflangGenerator,
    path: &str,
    last_modified: DateTime<Utc>,
    change_frequency: ChangeFrequency,
    priority: f32,
) {
    let alternates: Vec<(String, String)> = generator
        .links(path)
        .into_iter()
        .filter_map(|link| match link.tag {
            HreflangTag::Language(code) => Some((code, link.href)),
            HreflangTag::XDefault => None,
        })
        .collect();

    for (_, url) in &alternates {
        entries.push(SitemapEntry {
            url: url.clone(),
            last_modified,
            change_frequency,
            priority,
            alternates: alternates.clone(),
        });
    }
}

/// Render entries as a sitemaps.org `urlset` with `xhtml:link` alternates.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.url));
        for (lang, href) in &entry.alternates {
            let _ = writeln!(
                xml,
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>",
                escape_xml(lang),
                escape_xml(href)
            );
        }
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(
            xml,
            "    <changefreq>{}</changefreq>",
            entry.change_frequency.as_str()
        );
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Article;
    use crate::i18n::LanguageRegistry;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn generator() -> HreflangGenerator {
        HreflangGenerator::new(Arc::new(LanguageRegistry::builtin()), "https://jurmola.com")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
    }

    fn articles() -> ArticleIndex {
        ArticleIndex::new(vec![Article {
            slug: "riga-mandatory-snail-work-day".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            title: None,
        }])
    }

    // ==================== Enumeration Tests ====================

    #[test]
    fn test_entry_count() {
        // 3 home + 4 categories x 3 + 1 article x 3 + 3 feeds
        let entries = build_sitemap(&generator(), &articles(), now());
        assert_eq!(entries.len(), 3 + 12 + 3 + 3);
    }

    #[test]
    fn test_home_pages_first() {
        let entries = build_sitemap(&generator(), &ArticleIndex::default(), now());
        let urls: Vec<&str> = entries[..3].iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://jurmola.com/en/",
                "https://jurmola.com/ru/",
                "https://jurmola.com/lv/"
            ]
        );
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[0].alternates.len(), 3);
    }

    #[test]
    fn test_category_fan_out() {
        let entries = build_sitemap(&generator(), &ArticleIndex::default(), now());
        let politics = &entries[3];
        assert_eq!(politics.url, "https://jurmola.com/en/politics/");
        assert_eq!(politics.priority, 0.9);
        assert_eq!(
            politics.alternates[2],
            ("lv".to_string(), "https://jurmola.com/lv/politics/".to_string())
        );
        assert_eq!(entries[4].url, "https://jurmola.com/ru/politics/");
    }

    #[test]
    fn test_article_uses_publication_date() {
        let entries = build_sitemap(&generator(), &articles(), now());
        let article = entries
            .iter()
            .find(|e| e.url == "https://jurmola.com/ru/news/riga-mandatory-snail-work-day")
            .unwrap();
        assert_eq!(
            article.last_modified,
            Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(article.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(article.priority, 0.8);
    }

    #[test]
    fn test_feeds_last_without_alternates() {
        let entries = build_sitemap(&generator(), &articles(), now());
        let feeds = &entries[entries.len() - 3..];
        assert_eq!(feeds[0].url, "https://jurmola.com/feed.xml?lang=en");
        assert_eq!(feeds[2].url, "https://jurmola.com/feed.xml?lang=lv");
        assert!(feeds.iter().all(|f| f.alternates.is_empty()));
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_xml() {
        let entries = build_sitemap(&generator(), &ArticleIndex::default(), now());
        let xml = render_xml(&entries);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://jurmola.com/en/culture/</loc>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"ru\" href=\"https://jurmola.com/ru/culture/\"/>"
        ));
        assert!(xml.contains("<lastmod>2026-02-01T12:00:00Z</lastmod>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_feed_entries() {
        let entries = build_sitemap(&generator(), &ArticleIndex::default(), now());
        let xml = render_xml(&entries);
        assert!(xml.contains("<loc>https://jurmola.com/feed.xml?lang=ru</loc>"));
        assert!(xml.contains("<priority>0.5</priority>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>\"'"), "a&amp;b&lt;c&gt;&quot;&apos;");
    }
}
