//! Tokens produced by the tag tokenizer.

use crate::delimiters::Delimiters;
use crate::span::Span;

/// A contiguous slice of the input line.
///
/// Whether a token is a tag or text is not stored; it is decided when the
/// token is consumed, via [`Token::is_tag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The covered text.
    pub text: &'src str,
    /// Location of this token in the line.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token covering `span` of `source`.
    #[must_use]
    pub fn new(source: &'src str, span: Span) -> Self {
        Self {
            text: span.text(source),
            span,
        }
    }

    /// Returns true if this token is markup under the given delimiters.
    #[must_use]
    pub fn is_tag(&self, delimiters: &Delimiters) -> bool {
        delimiters.is_tag(self.text)
    }
}
