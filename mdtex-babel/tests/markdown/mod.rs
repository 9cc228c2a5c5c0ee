//! Markdown format tests
//!
//! Tests for the Markdown → tree adapter.

mod import;
