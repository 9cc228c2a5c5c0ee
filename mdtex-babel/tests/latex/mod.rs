//! LaTeX format tests
//!
//! End to end Markdown → LaTeX scenarios, plus property tests for the escaper
//! and the renderer over generated trees.

mod escape;
mod properties;
mod scenarios;
