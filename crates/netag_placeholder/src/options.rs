//! Options for placeholder handling.

use netag_markup::ParserOptions;

use crate::substitute::DEFAULT_SENTINEL;

/// What to do with a line whose markup cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Keep the original line as the clean line, with no entities.
    #[default]
    PassThrough,
    /// Surface the markup error to the caller.
    Reject,
}

/// Configuration for stripping and restoring placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderOptions {
    /// Whether markup is stripped and placeholders restored at all.
    pub enabled: bool,
    /// Policy for lines with malformed markup.
    pub fallback: FallbackPolicy,
    /// First character of a placeholder word.
    pub sentinel: char,
    /// Markup parser configuration.
    pub parser: ParserOptions,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            fallback: FallbackPolicy::PassThrough,
            sentinel: DEFAULT_SENTINEL,
            parser: ParserOptions::default(),
        }
    }
}

impl PlaceholderOptions {
    /// Creates a configuration that leaves lines untouched.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set the fallback policy.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Builder method to set the placeholder sentinel.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: char) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Builder method to set the parser options.
    #[must_use]
    pub fn with_parser(mut self, parser: ParserOptions) -> Self {
        self.parser = parser;
        self
    }
}
