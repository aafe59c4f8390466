//! Per-sentence placeholder records.
//!
//! A [`SentenceRecord`] is created when a line is stripped and owns that
//! line's entity list until the transformed output has been restored.

use netag_foundation::{EntityList, ErrorContext, Result};
use netag_markup::AnnotationParser;

use crate::options::{FallbackPolicy, PlaceholderOptions};
use crate::substitute::substitute_with_sentinel;

/// How a line's markup was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStatus {
    /// The line contained no markup.
    Plain,
    /// Markup was stripped and entities extracted.
    Stripped,
    /// Markup was malformed; the original line was kept.
    PassedThrough,
    /// Placeholder handling is turned off.
    Disabled,
}

/// The stripped form of one input line and the entities taken from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceRecord {
    line_number: Option<usize>,
    clean_line: String,
    entities: EntityList,
    status: LineStatus,
    /// `None` when placeholders are disabled.
    sentinel: Option<char>,
}

impl SentenceRecord {
    /// Strips `line` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns the markup error when the line is malformed and the fallback
    /// policy is [`FallbackPolicy::Reject`].
    pub fn parse(line: &str, options: &PlaceholderOptions) -> Result<Self> {
        Self::build(None, line, options)
    }

    /// Strips the 1-based `line_number`th line of a stream.
    ///
    /// # Errors
    ///
    /// Same as [`SentenceRecord::parse`]; the error context names the line.
    pub fn parse_at(line_number: usize, line: &str, options: &PlaceholderOptions) -> Result<Self> {
        Self::build(Some(line_number), line, options)
    }

    fn build(line_number: Option<usize>, line: &str, options: &PlaceholderOptions) -> Result<Self> {
        let passthrough = |status| Self {
            line_number,
            clean_line: line.to_string(),
            entities: EntityList::new(),
            status,
            sentinel: options.enabled.then_some(options.sentinel),
        };

        if !options.enabled {
            return Ok(passthrough(LineStatus::Disabled));
        }

        match AnnotationParser::parse_with(&options.parser, line) {
            Ok(stripped) => {
                let status = if stripped.had_markup() {
                    LineStatus::Stripped
                } else {
                    LineStatus::Plain
                };
                Ok(Self {
                    line_number,
                    clean_line: stripped.clean_line,
                    entities: stripped.entities,
                    status,
                    sentinel: Some(options.sentinel),
                })
            }
            Err(err) if err.is_markup() && options.fallback == FallbackPolicy::PassThrough => {
                tracing::debug!(error = %err, line_number, "passing malformed line through");
                Ok(passthrough(LineStatus::PassedThrough))
            }
            Err(err) => {
                let mut context = ErrorContext::new().with_line(line);
                if let Some(n) = line_number {
                    context = context.with_line_number(n);
                }
                Err(err.with_context(context))
            }
        }
    }

    /// The 1-based line number, if known.
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        self.line_number
    }

    /// Text to hand to the transformation.
    #[must_use]
    pub fn clean_line(&self) -> &str {
        &self.clean_line
    }

    /// Entities extracted from the line.
    #[must_use]
    pub const fn entities(&self) -> &EntityList {
        &self.entities
    }

    /// How the line's markup was handled.
    #[must_use]
    pub const fn status(&self) -> LineStatus {
        self.status
    }

    /// Returns true if markup was stripped from the line.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.status == LineStatus::Stripped
    }

    /// Restores entities into the transformed text, consuming the record.
    #[must_use]
    pub fn restore(self, transformed: &str) -> String {
        self.restore_one(transformed)
    }

    /// Restores entities into each hypothesis independently.
    ///
    /// Every hypothesis starts again from the first entity.
    pub fn restore_all<'a, I>(&self, hypotheses: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        hypotheses
            .into_iter()
            .map(|hypothesis| self.restore_one(hypothesis))
            .collect()
    }

    fn restore_one(&self, transformed: &str) -> String {
        match self.sentinel {
            Some(sentinel) => {
                substitute_with_sentinel(transformed, self.entities.values(), sentinel)
            }
            None => transformed.to_string(),
        }
    }
}
