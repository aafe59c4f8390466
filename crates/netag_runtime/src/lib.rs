//! REPL, CLI, and entity sidecar serialization for netag.
//!
//! This crate provides:
//! - [`Repl`] - Interactive strip-and-restore loop
//! - [`batch`] - Stream processing behind the `strip`, `restore`, and `roundtrip` commands
//! - [`serialize`] - `MessagePack` sidecar carrying entity lists between processes
//! - [`logging`] - The binary's `tracing` subscriber

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod editor;
pub mod highlight;
pub mod logging;
pub mod repl;
pub mod serialize;

pub use batch::{restore_stream, roundtrip_stream, strip_stream};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use highlight::MarkupHighlighter;
pub use logging::Verbosity;
pub use repl::{Outcome, Repl};
pub use serialize::LineEntities;
