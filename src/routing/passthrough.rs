//! Paths that language routing must never rewrite.

/// Prefixes served as-is: framework internals, the API, cover images, the feed.
pub const DEFAULT_EXEMPT_PREFIXES: [&str; 4] = ["/_next", "/api/", "/cover/", "/feed.xml"];

/// Classifier for infrastructure and static-file paths.
///
/// Runs before every other routing step; an asset path that slips through
/// gets redirected under a language prefix and 404s.
#[derive(Debug, Clone)]
pub struct PassthroughRules {
    prefixes: Vec<String>,
}

impl PassthroughRules {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one more exempt prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// True when the path must be served unmodified.
    pub fn is_exempt(&self, path: &str) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str())) {
            return true;
        }

        // Static file heuristic: the last segment has an extension
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }
}

impl Default for PassthroughRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXEMPT_PREFIXES)
    }
}
