//! URL localization: every content URL lives under a language prefix.
//!
//! - `passthrough`: paths that are never rewritten (assets, API, feed)
//! - `legacy`: fixed redirects for old URLs and `?lang=` query migration
//! - `prefix`: language prefix detection, shared with hreflang generation
//! - `resolver`: the request pipeline tying the pieces together

pub mod legacy;
pub mod passthrough;
pub mod prefix;
pub mod resolver;

pub use legacy::{LegacyRedirects, RedirectRule};
pub use passthrough::PassthroughRules;
pub use prefix::{has_language_prefix, normalize_path, prepend_language_prefix, strip_language_prefix};
pub use resolver::{LocaleResolver, RedirectKind, Resolution};
