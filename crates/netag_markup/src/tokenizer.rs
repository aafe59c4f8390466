//! Tag tokenizer.
//!
//! Splits a line into alternating runs of text and single tags:
//!
//! ```text
//! this <b> is a </b> test .
//!   => "this ", "<b>", " is a ", "</b>", " test ."
//! ```
//!
//! The tokenizer splits on every delimited span; deciding which spans are
//! real tags is left to [`Delimiters::is_tag`].

use netag_foundation::{Error, Result};

use crate::delimiters::Delimiters;
use crate::span::Span;
use crate::token::Token;

/// Iterator over the tokens of one line.
///
/// Yields `Err` once if a left delimiter is never closed, then stops.
pub struct Tokenizer<'src, 'd> {
    /// Line being tokenized.
    source: &'src str,
    /// Delimiter pair to split on.
    delimiters: &'d Delimiters,
    /// Current byte offset in source.
    position: usize,
    /// Tag found while emitting the text in front of it.
    pending: Option<Token<'src>>,
    /// Set once the end of input or an error has been reached.
    finished: bool,
}

impl<'src, 'd> Tokenizer<'src, 'd> {
    /// Creates a tokenizer for the given line.
    #[must_use]
    pub fn new(source: &'src str, delimiters: &'d Delimiters) -> Self {
        Self {
            source,
            delimiters,
            position: 0,
            pending: None,
            finished: false,
        }
    }

    /// Tokenizes a whole line.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMarkup` if a left delimiter has no matching right
    /// delimiter.
    pub fn tokenize_all(source: &'src str, delimiters: &'d Delimiters) -> Result<Vec<Token<'src>>> {
        Tokenizer::new(source, delimiters).collect()
    }

    fn next_token(&mut self) -> Option<Result<Token<'src>>> {
        if let Some(tag) = self.pending.take() {
            return Some(Ok(tag));
        }
        if self.finished || self.position == self.source.len() {
            self.finished = true;
            return None;
        }

        let start = self.position;
        let left = self.delimiters.left();
        let right = self.delimiters.right();

        let Some(found) = self.source[start..].find(left) else {
            self.finished = true;
            self.position = self.source.len();
            return Some(Ok(Token::new(
                self.source,
                Span::new(start, self.source.len()),
            )));
        };
        let lpos = start + found;

        // The right delimiter may overlap the last character of the left one.
        let search_from = lpos + left.len() - left.chars().next_back().map_or(0, char::len_utf8);
        let Some(found) = self.source[search_from..].find(right) else {
            tracing::info!(offset = lpos, line = self.source, "malformed markup: unterminated tag");
            self.finished = true;
            return Some(Err(Error::malformed_markup(lpos)));
        };
        let end = search_from + found + right.len();
        self.position = end;

        let tag = Token::new(self.source, Span::new(lpos, end));
        if lpos > start {
            self.pending = Some(tag);
            return Some(Ok(Token::new(self.source, Span::new(start, lpos))));
        }
        Some(Ok(tag))
    }
}

impl<'src> Iterator for Tokenizer<'src, '_> {
    type Item = Result<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes `line` with the given delimiters, returning the token texts.
///
/// # Errors
///
/// Returns `MalformedMarkup` for an unterminated tag.
pub fn tokenize<'src>(line: &'src str, delimiters: &Delimiters) -> Result<Vec<&'src str>> {
    Tokenizer::new(line, delimiters)
        .map(|token| token.map(|t| t.text))
        .collect()
}
