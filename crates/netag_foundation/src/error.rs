//! Error types for the netag system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for netag operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unterminated-tag error at the given byte offset.
    #[must_use]
    pub fn malformed_markup(offset: usize) -> Self {
        Self::new(ErrorKind::MalformedMarkup { offset })
    }

    /// Creates an empty tag name error.
    #[must_use]
    pub fn empty_tag_name() -> Self {
        Self::new(ErrorKind::EmptyTagName)
    }

    /// Creates an unsupported unary tag error.
    #[must_use]
    pub fn unsupported_unary_tag(tag: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedUnaryTag { tag: tag.into() })
    }

    /// Creates an unmatched close tag error.
    #[must_use]
    pub fn unmatched_close(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnmatchedClose { name: name.into() })
    }

    /// Creates a tag nesting error.
    #[must_use]
    pub fn mismatched_tag_names(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::MismatchedTagNames {
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates an error for an entity tag that does not cover exactly one word.
    #[must_use]
    pub fn multi_word_entity_span(name: impl Into<String>, start: usize, end: usize) -> Self {
        Self::new(ErrorKind::MultiWordEntitySpan {
            name: name.into(),
            start,
            end,
        })
    }

    /// Creates an unclosed tag error.
    #[must_use]
    pub fn unclosed_tag(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnclosedTag { name: name.into() })
    }

    /// Returns true if this error came from malformed markup in a single line.
    #[must_use]
    pub fn is_markup(&self) -> bool {
        self.kind.is_markup()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A left delimiter was never followed by a right delimiter.
    #[error("malformed markup: unterminated tag at byte {offset}")]
    MalformedMarkup {
        /// Byte offset of the unterminated left delimiter.
        offset: usize,
    },

    /// A tag with nothing between its delimiters.
    #[error("empty tag name")]
    EmptyTagName,

    /// A self-closing tag such as `<wall/>`.
    #[error("unary tags are not supported: <{tag}>")]
    UnsupportedUnaryTag {
        /// Interior text of the offending tag.
        tag: String,
    },

    /// A close tag with no open tag left on the stack.
    #[error("close tag </{name}> has no matching open tag")]
    UnmatchedClose {
        /// Name of the close tag.
        name: String,
    },

    /// A close tag that does not match the innermost open tag.
    #[error("mismatched tags: expected </{expected}>, found </{found}>")]
    MismatchedTagNames {
        /// Name of the innermost open tag.
        expected: String,
        /// Name of the close tag encountered.
        found: String,
    },

    /// An entity tag that does not wrap exactly one word.
    #[error("<{name}> must span exactly one word (opened at word {start}, closed at word {end})")]
    MultiWordEntitySpan {
        /// Name of the entity tag.
        name: String,
        /// Word position where the tag opened.
        start: usize,
        /// Word position where the tag closed.
        end: usize,
    },

    /// Input ended while a tag was still open.
    #[error("unclosed tag <{name}>")]
    UnclosedTag {
        /// Name of the innermost unclosed tag.
        name: String,
    },

    /// Reading or writing a stream or file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding the entity sidecar failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A caller supplied an unusable option or argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns true for the per-line markup failures.
    ///
    /// These are always recoverable: the caller decides whether to pass the
    /// line through unchanged or reject it.
    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(
            self,
            Self::MalformedMarkup { .. }
                | Self::EmptyTagName
                | Self::UnsupportedUnaryTag { .. }
                | Self::UnmatchedClose { .. }
                | Self::MismatchedTagNames { .. }
                | Self::MultiWordEntitySpan { .. }
                | Self::UnclosedTag { .. }
        )
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// 1-based line number in the input stream.
    pub line_number: Option<usize>,
    /// The offending input line.
    pub line: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }

    /// Sets the offending line.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.line_number {
            write!(f, "at line {n}")?;
        }
        if let Some(line) = &self.line {
            if self.line_number.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
