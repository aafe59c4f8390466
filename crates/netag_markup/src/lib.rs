//! Inline tag tokenizer, annotation parser, and attribute extraction for netag.
//!
//! This crate provides:
//! - [`Tokenizer`] - Splits a line into text runs and single tags
//! - [`AnnotationParser`] - Removes markup and collects `<ne>` entity values
//! - [`extract_attribute`] - Quoted attribute lookup with escaped quotes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod delimiters;
pub mod parser;
pub mod span;
pub mod token;
pub mod tokenizer;

pub use attribute::extract_attribute;
pub use delimiters::Delimiters;
pub use parser::{AnnotationParser, OpenTagFrame, ParserOptions, StrippedLine, strip_and_extract};
pub use span::Span;
pub use token::Token;
pub use tokenizer::{Tokenizer, tokenize};
