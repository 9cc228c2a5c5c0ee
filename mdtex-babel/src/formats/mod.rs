//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the document tree and various text representations.

pub mod icons;
pub mod json;
pub mod latex;
pub mod markdown;
pub mod treeviz;

pub use json::JsonFormat;
pub use latex::{LatexFormat, LatexOptions};
pub use markdown::{MarkdownFormat, MarkdownOptions};
pub use treeviz::TreevizFormat;
