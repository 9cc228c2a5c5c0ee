//! Document tree consumed by the renderers.
//!
//! The tree is produced by an input format (see `formats::markdown` and
//! `formats::json`) and is never mutated afterwards. Renderers borrow it for
//! the duration of a single call.

pub mod nodes;

pub use nodes::{Node, NodeKind};
