//! Error types for format and rendering operations

use thiserror::Error;

/// Errors raised while rendering a node tree.
///
/// Every variant describes a tree that breaks the structural contract of the
/// upstream parser. Rendering stops at the first violation so no partial
/// LaTeX is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The tree handed to the document renderer is not rooted at a Document
    #[error("Expected a Document node at the root, found {found}")]
    NotADocument { found: &'static str },
    /// A child whose kind is not permitted under its parent
    #[error("{child} node is not allowed inside {parent}")]
    UnexpectedChild {
        parent: &'static str,
        child: &'static str,
    },
    /// A leaf node that nevertheless carries children
    #[error("{kind} node cannot have children (found {count})")]
    UnexpectedChildren { kind: &'static str, count: usize },
    /// A heading level outside 1-6
    #[error("Heading level {0} is outside the supported range 1-6")]
    InvalidHeadingLevel(u8),
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation or input
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// The node tree could not be rendered
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
