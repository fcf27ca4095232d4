//! Site content index: categories and the published article list.

use crate::slug::{generate_seo_slug, is_valid_seo_slug, DEFAULT_MAX_WORDS};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Category listing pages, in navigation order.
pub const CATEGORIES: [&str; 4] = ["politics", "culture", "business", "opinion"];

/// A published article as far as routing and the sitemap care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    /// Publication date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// English title; suggests a replacement when the slug fails validation
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    articles: Vec<Article>,
}

impl ArticleIndex {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    /// Load the index from a JSON array of articles.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read article index {}", path.display()))?;
        let articles: Vec<Article> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse article index {}", path.display()))?;

        info!("Loaded {} articles from {}", articles.len(), path.display());
        let index = Self { articles };
        for problem in index.slug_problems() {
            warn!("{}", problem);
        }
        Ok(index)
    }

    /// Load from `path` when configured, otherwise start empty.
    pub fn load_optional(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn find(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    /// Describe every article whose slug is not a valid SEO slug.
    ///
    /// Slugs stay servable either way; renaming one needs a legacy redirect.
    pub fn slug_problems(&self) -> Vec<String> {
        self.articles
            .iter()
            .filter(|article| !is_valid_seo_slug(&article.slug))
            .map(|article| {
                let suggestion = article
                    .title
                    .as_deref()
                    .map(|title| generate_seo_slug(title, DEFAULT_MAX_WORDS))
                    .filter(|slug| is_valid_seo_slug(slug));
                match suggestion {
                    Some(slug) => format!(
                        "Article slug '{}' is not SEO-friendly (suggested: {})",
                        article.slug, slug
                    ),
                    None => format!("Article slug '{}' is not SEO-friendly", article.slug),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
