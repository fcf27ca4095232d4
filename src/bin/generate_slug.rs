//! Slug binary - suggests SEO slugs for article titles
//!
//! Usage:
//!   cargo run --bin generate-slug -- "Article Title" ["Another Title" ...]
//!   cargo run --bin generate-slug                 # Show the historic sample titles

use jurmola_telegraphs::slug::{generate_seo_slug, is_valid_seo_slug, DEFAULT_MAX_WORDS};

const SAMPLE_TITLES: [&str; 2] = [
    "Latvian Capital to Introduce Mandatory 'Walk Your Snail to Work Day' to Boost Productivity",
    "Riga Announces Revolutionary Urban Bee Network to Solve All Transportation Issues",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let titles: Vec<&str> = if args.is_empty() {
        SAMPLE_TITLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    println!("SEO Slug Generation:");
    println!("{}", "=".repeat(80));
    for title in titles {
        let slug = generate_seo_slug(title, DEFAULT_MAX_WORDS);
        let word_count = if slug.is_empty() { 0 } else { slug.split('-').count() };
        println!();
        println!("Title: {}", title);
        println!("Slug:  {}", slug);
        println!(
            "Words: {} ({})",
            word_count,
            if is_valid_seo_slug(&slug) { "valid" } else { "needs editing" }
        );
    }
}
