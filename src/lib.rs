//! netag - Strip inline entity markup from text and restore it afterwards
//!
//! This crate re-exports all layers of the netag system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: netag_runtime      — CLI, REPL, entity sidecar serialization
//! Layer 2: netag_placeholder  — Sentence records, placeholder substitution
//! Layer 1: netag_markup       — Tag tokenizer, annotation parser, attributes
//! Layer 0: netag_foundation   — Core types (ExtractedEntity, EntityList, Error)
//! ```

pub use netag_foundation as foundation;
pub use netag_markup as markup;
pub use netag_placeholder as placeholder;
pub use netag_runtime as runtime;
