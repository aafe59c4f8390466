//! Integration tests for the netag_placeholder crate.
//!
//! Tests for:
//! - Placeholder recognition and FIFO substitution
//! - Sentence records and fallback policies
//! - The strip, transform, restore pipeline

mod record_tests;
