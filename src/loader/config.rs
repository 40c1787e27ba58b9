//! Loader configuration.

/// Configuration for how tolerant the edge-list loaders are.
///
/// Token parse failures (a node identifier that is not an unsigned integer, a weight that is not
/// a number) are always errors, and blank lines are always skipped. The configuration only
/// decides what happens to the remaining irregular lines:
///
/// | Situation | Lenient (default) | Strict |
/// |-----------|-------------------|--------|
/// | Unweighted line with a single token | skipped | [`crate::Error::MalformedLine`] |
/// | Weighted line without exactly three tokens | skipped | [`crate::Error::MalformedLine`] |
/// | Negative, infinite or NaN weight | kept | [`crate::Error::MalformedLine`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoaderConfig {
    /// Reject irregular lines instead of skipping them
    pub strict: bool,
}

impl LoaderConfig {
    /// Tolerant loading: irregular lines are skipped with a warning. Same as `default()`.
    #[must_use]
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Strict loading: every non-blank line must match the format exactly, and weights must be
    /// finite and non-negative.
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(LoaderConfig::default(), LoaderConfig::lenient());
        assert!(!LoaderConfig::lenient().strict);
        assert!(LoaderConfig::strict().strict);
    }
}
