//! Request path resolution: pass through, continue, or redirect.

use crate::i18n::LanguageRegistry;
use crate::routing::legacy::{migrate_query, LegacyRedirects};
use crate::routing::passthrough::PassthroughRules;
use crate::routing::prefix::has_language_prefix;
use std::sync::Arc;

/// Redirect class: permanent ones get cached by clients and crawlers.
///
/// The HTTP edge maps these to 301 and 307.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    Permanent,
    Temporary,
}

/// What to do with an inbound request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Infrastructure or static file: serve untouched.
    Passthrough,
    /// Already language-prefixed: serve normally.
    Continue,
    /// Send the client elsewhere.
    Redirect { target: String, kind: RedirectKind },
}

/// Maps any request path onto the language-prefixed URL scheme.
///
/// Holds only immutable configuration; one instance serves all requests.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    registry: Arc<LanguageRegistry>,
    passthrough: PassthroughRules,
    legacy: LegacyRedirects,
}

impl LocaleResolver {
    /// Resolver with the site's default exemptions and legacy redirects.
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        let legacy = LegacyRedirects::site_defaults(&registry.default_language().code);
        Self {
            registry,
            passthrough: PassthroughRules::default(),
            legacy,
        }
    }

    pub fn with_passthrough(mut self, passthrough: PassthroughRules) -> Self {
        self.passthrough = passthrough;
        self
    }

    pub fn with_legacy_redirects(mut self, legacy: LegacyRedirects) -> Self {
        self.legacy = legacy;
        self
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Resolve a request path and its query pairs, in request order.
    ///
    /// Order: passthrough, legacy table, `?lang=` migration, prefix check,
    /// default-language redirect. Redirect targets never carry a query string.
    pub fn resolve(&self, path: &str, query: &[(String, String)]) -> Resolution {
        if self.passthrough.is_exempt(path) {
            return Resolution::Passthrough;
        }

        if let Some(rule) = self.legacy.lookup(path) {
            return Resolution::Redirect {
                target: rule.to.clone(),
                kind: rule.kind,
            };
        }

        if let Some(target) = migrate_query(&self.registry, path, query) {
            return Resolution::Redirect {
                target,
                kind: RedirectKind::Permanent,
            };
        }

        if has_language_prefix(&self.registry, path) {
            return Resolution::Continue;
        }

        self.redirect_to_default(path)
    }

    fn redirect_to_default(&self, path: &str) -> Resolution {
        let default = &self.registry.default_language().code;

        if path.is_empty() || path == "/" {
            return Resolution::Redirect {
                target: format!("/{}/", default),
                kind: RedirectKind::Temporary,
            };
        }

        Resolution::Redirect {
            target: format!("/{}{}", default, path),
            kind: RedirectKind::Permanent,
        }
    }
}
