//! Core types for netag.
//!
//! This crate provides:
//! - [`ExtractedEntity`] - One entity value lifted out of annotated text
//! - [`EntityList`] - The ordered entities of a single line
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;

pub use entity::{EntityList, ExtractedEntity};
pub use error::{Error, ErrorContext, ErrorKind, Result};
