//! Sitemap binary - writes the site's sitemap XML without starting the server
//!
//! Usage:
//!   cargo run --bin sitemap                      # Print to stdout
//!   cargo run --bin sitemap -- out/sitemap.xml   # Write to a file
//!
//! Optional environment variables:
//! - SITE_BASE_URL (defaults to https://jurmola.com)
//! - ARTICLES_FILE (JSON article index; without it only home, category and feed URLs are listed)
//! - SITE_LANGUAGES / SITE_DEFAULT_LANGUAGE

use anyhow::{Context, Result};
use chrono::Utc;
use jurmola_telegraphs::catalog::ArticleIndex;
use jurmola_telegraphs::config::Config;
use jurmola_telegraphs::seo::{build_sitemap, render_xml, HreflangGenerator};
use std::sync::Arc;
use tracing::info;

fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean XML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jurmola_telegraphs=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let registry = Arc::new(config.language_registry()?);
    let articles = ArticleIndex::load_optional(config.articles_file.as_deref())?;
    let generator = HreflangGenerator::new(registry, &config.base_url);

    let entries = build_sitemap(&generator, &articles, Utc::now());
    let xml = render_xml(&entries);
    info!("Generated {} sitemap entries", entries.len());

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, xml).with_context(|| format!("Failed to write {}", path))?;
            info!("✓ Sitemap written to {}", path);
        }
        None => print!("{}", xml),
    }

    Ok(())
}
