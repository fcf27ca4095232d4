use crate::i18n::LanguageRegistry;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Site
    pub base_url: String,
    pub site_dir: Option<String>,
    pub articles_file: Option<String>,

    // Languages
    pub languages: Vec<String>,
    pub default_language: String,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Site
            base_url: std::env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "https://jurmola.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            site_dir: std::env::var("SITE_DIR").ok(),
            articles_file: std::env::var("ARTICLES_FILE").ok(),

            // Languages
            languages: std::env::var("SITE_LANGUAGES")
                .unwrap_or_else(|_| "en,ru,lv".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            default_language: std::env::var("SITE_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            // Server
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 8080,
            },
        })
    }

    /// Build the language registry, failing on an invalid language set.
    pub fn language_registry(&self) -> Result<LanguageRegistry> {
        LanguageRegistry::from_codes(self.languages.as_slice(), &self.default_language)
            .context("Invalid SITE_LANGUAGES / SITE_DEFAULT_LANGUAGE")
    }
}
