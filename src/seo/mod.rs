//! Search-engine metadata: hreflang links, page alternates and the sitemap.

pub mod hreflang;
pub mod metadata;
pub mod sitemap;

pub use hreflang::{HreflangGenerator, HreflangLink, HreflangTag};
pub use metadata::PageAlternates;
pub use sitemap::{build_sitemap, render_xml, ChangeFrequency, SitemapEntry};
