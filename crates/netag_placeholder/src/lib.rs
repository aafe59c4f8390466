//! Per-line placeholder records and entity re-insertion for netag.
//!
//! This crate provides:
//! - [`SentenceRecord`] - One line's clean text and entities, from strip to restore
//! - [`substitute`] - FIFO replacement of `$word` placeholders
//! - [`PlaceholderOptions`] - Enable switch, fallback policy, sentinel
//! - [`Transform`] - The seam to an external text transformation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod options;
pub mod pipeline;
pub mod record;
pub mod substitute;

pub use options::{FallbackPolicy, PlaceholderOptions};
pub use pipeline::{Identity, Transform, process_line};
pub use record::{LineStatus, SentenceRecord};
pub use substitute::{DEFAULT_SENTINEL, is_placeholder, substitute, substitute_with_sentinel};
