//! Markup highlighting for the REPL.

use std::borrow::Cow;

use netag_markup::{Delimiters, Tokenizer};
use netag_placeholder::{DEFAULT_SENTINEL, PlaceholderOptions, is_placeholder};

/// Colors tags and placeholders in REPL input.
pub struct MarkupHighlighter {
    delimiters: Delimiters,
    sentinel: char,
}

impl Default for MarkupHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupHighlighter {
    /// Creates a highlighter for the default delimiters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: Delimiters::default(),
            sentinel: DEFAULT_SENTINEL,
        }
    }

    /// Creates a highlighter matching the delimiters and sentinel in use.
    #[must_use]
    pub fn from_options(options: &PlaceholderOptions) -> Self {
        Self {
            delimiters: options.parser.delimiters.clone(),
            sentinel: options.sentinel,
        }
    }

    /// Highlight a line of input.
    ///
    /// Lines with an unterminated tag are left uncolored.
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.contains(self.delimiters.left()) && !line.contains(self.sentinel) {
            return Cow::Borrowed(line);
        }
        let Ok(tokens) = Tokenizer::tokenize_all(line, &self.delimiters) else {
            return Cow::Borrowed(line);
        };

        let mut result = String::with_capacity(line.len() * 2);
        for token in tokens {
            if token.is_tag(&self.delimiters) {
                result.push_str("\x1b[36m"); // cyan
                result.push_str(token.text);
                result.push_str("\x1b[0m");
            } else {
                highlight_text(token.text, self.sentinel, &mut result);
            }
        }
        Cow::Owned(result)
    }
}

/// Copies `text`, marking placeholder words.
fn highlight_text(text: &str, sentinel: char, result: &mut String) {
    let mut rest = text;
    while !rest.is_empty() {
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        if is_placeholder(word, sentinel) {
            result.push_str("\x1b[1;33m"); // bold yellow
            result.push_str(word);
            result.push_str("\x1b[0m");
        } else {
            result.push_str(word);
        }

        let space_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
        result.push_str(&tail[..space_end]);
        rest = &tail[space_end..];
    }
}
