//! Annotation parser.
//!
//! Walks the token stream of one line with a stack of open tags, removing
//! all markup and collecting the `entity` attribute of every single-word
//! `<ne>` tag:
//!
//! ```text
//! the <ne translation="$num" entity="100">$num</ne> cats
//!   => clean line: "the $num cats"
//!      entities:   [1: "100"]
//! ```
//!
//! Tags must nest properly. Crossing, unclosed, unmatched, and self-closing
//! tags abort the parse; nothing is repaired.

use netag_foundation::{EntityList, Error, ExtractedEntity, Result};

use crate::attribute::extract_attribute;
use crate::delimiters::Delimiters;
use crate::tokenizer::Tokenizer;

/// Options controlling which tags carry entities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Tag delimiter pair.
    pub delimiters: Delimiters,
    /// Name of the entity-carrying tag.
    pub entity_tag: String,
    /// Attribute holding the entity value.
    pub entity_attribute: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            delimiters: Delimiters::default(),
            entity_tag: "ne".to_string(),
            entity_attribute: "entity".to_string(),
        }
    }
}

impl ParserOptions {
    /// Builder method to set the delimiter pair.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Builder method to set the entity tag name.
    #[must_use]
    pub fn with_entity_tag(mut self, tag: impl Into<String>) -> Self {
        self.entity_tag = tag.into();
        self
    }

    /// Builder method to set the entity attribute name.
    #[must_use]
    pub fn with_entity_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.entity_attribute = attribute.into();
        self
    }
}

/// A tag that has been opened but not yet closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenTagFrame<'src> {
    /// Tag name.
    pub name: &'src str,
    /// Words in the clean line before the tag opened.
    pub start_word_position: usize,
    /// Attribute text following the name.
    pub raw_content: &'src str,
}

/// A line with its markup removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StrippedLine {
    /// Text with all tags removed.
    pub clean_line: String,
    /// Entities in the order their tags opened.
    pub entities: EntityList,
    /// Number of tags removed.
    pub tags_removed: usize,
}

impl StrippedLine {
    /// Returns true if any tag was removed from the line.
    #[must_use]
    pub const fn had_markup(&self) -> bool {
        self.tags_removed > 0
    }
}

/// Strips markup from lines and extracts entity values.
#[derive(Clone, Debug, Default)]
pub struct AnnotationParser {
    options: ParserOptions,
}

impl AnnotationParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Returns the parser's options.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Strips all markup from `line` and extracts its entities.
    ///
    /// # Errors
    ///
    /// Returns a markup error if the line is not well formed. The error only
    /// concerns this line.
    pub fn parse(&self, line: &str) -> Result<StrippedLine> {
        Self::parse_with(&self.options, line)
    }

    /// Strips `line` using borrowed options.
    ///
    /// # Errors
    ///
    /// Returns a markup error if the line is not well formed.
    pub fn parse_with(options: &ParserOptions, line: &str) -> Result<StrippedLine> {
        if !line.contains(options.delimiters.left()) {
            return Ok(StrippedLine {
                clean_line: line.to_string(),
                entities: EntityList::new(),
                tags_removed: 0,
            });
        }

        parse_tokens(options, line).inspect_err(|err| {
            tracing::debug!(error = %err, line, "annotation parse aborted");
        })
    }
}

fn parse_tokens(options: &ParserOptions, line: &str) -> Result<StrippedLine> {
    let delimiters = &options.delimiters;
    let mut state = ParseState::default();

    for token in Tokenizer::new(line, delimiters) {
        let token = token?;
        if token.is_tag(delimiters) {
            state.process_tag(token.text, options)?;
            state.tags_removed += 1;
        } else {
            state.push_text(token.text);
        }
    }

    state.finish()
}

/// Mutable state for one parse call.
#[derive(Default)]
struct ParseState<'src> {
    stack: Vec<OpenTagFrame<'src>>,
    clean_line: String,
    word_position: usize,
    entities: EntityList,
    tags_removed: usize,
}

impl<'src> ParseState<'src> {
    fn push_text(&mut self, text: &str) {
        // Keep words apart where a removed tag was the only separator.
        let boundary = (self.clean_line.chars().next_back(), text.chars().next());
        if let (Some(last), Some(first)) = boundary {
            if !last.is_whitespace() && !first.is_whitespace() {
                self.clean_line.push(' ');
            }
        }
        self.clean_line.push_str(text);
        self.word_position = self.clean_line.split_whitespace().count();
    }

    fn process_tag(&mut self, token: &'src str, options: &ParserOptions) -> Result<()> {
        let tag = options
            .delimiters
            .strip(token)
            .trim_matches([' ', '\t', '\n']);

        if tag.is_empty() {
            return Err(Error::empty_tag_name());
        }
        if tag.ends_with('/') {
            return Err(Error::unsupported_unary_tag(tag));
        }

        let (is_close, tag) = match tag.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, tag),
        };
        let (name, content) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));

        if !is_close {
            self.stack.push(OpenTagFrame {
                name,
                start_word_position: self.word_position,
                raw_content: content,
            });
            return Ok(());
        }

        let frame = self.stack.pop().ok_or_else(|| Error::unmatched_close(name))?;
        if frame.name != name {
            return Err(Error::mismatched_tag_names(frame.name, name));
        }

        if name == options.entity_tag {
            let start = frame.start_word_position;
            if start + 1 != self.word_position {
                return Err(Error::multi_word_entity_span(name, start, self.word_position));
            }
            let value = extract_attribute(frame.raw_content, &options.entity_attribute)
                .unwrap_or_default();
            self.entities.push(ExtractedEntity::new(start, value));
        }

        Ok(())
    }

    fn finish(self) -> Result<StrippedLine> {
        if let Some(open) = self.stack.last() {
            return Err(Error::unclosed_tag(open.name));
        }
        Ok(StrippedLine {
            clean_line: self.clean_line,
            entities: self.entities,
            tags_removed: self.tags_removed,
        })
    }
}

/// Strips markup from `line` using the default `<`/`>` delimiters and the
/// `<ne entity="...">` entity tag.
///
/// # Errors
///
/// Returns a markup error if the line is not well formed.
pub fn strip_and_extract(line: &str) -> Result<StrippedLine> {
    AnnotationParser::default().parse(line)
}
