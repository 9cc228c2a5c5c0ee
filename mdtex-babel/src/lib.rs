//! Markdown to LaTeX conversion
//!
//!     This crate turns a Markdown document tree into LaTeX source that compiles with a standard
//!     distribution. It also provides the formats around that renderer: a Markdown reader, a
//!     JSON mapping of the tree and a tree visualisation for debugging.
//!
//!     This is a pure lib, that is, it powers mdtex-cli but is shell agnostic: no code should be
//!     written that supposes a shell environment, be it to std print, env vars etc. Diagnostics
//!     go through `tracing` and are only visible if the caller installs a subscriber.
//!
//!     The file structure :
//!     .
//!     ├── ast                     # Document tree (Node, NodeKind)
//!     ├── error.rs                # RenderError, FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── latex               # escape, inline, block, document, context
//!     │   ├── markdown            # comrak AST → document tree
//!     │   ├── json                # serde mapping of the tree
//!     │   ├── treeviz             # box drawing view of the tree
//!     │   └── icons.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithm
//!
//!     Rendering is a single recursive fold over the tree. Each node kind maps to a fixed LaTeX
//!     construct (see formats/latex/mod.rs for the table). Text is escaped exactly once, at the
//!     leaves; code blocks pass through literally. Package needs are recorded in a per-call
//!     RenderContext while the body renders, and the preamble is built from it afterwards, so a
//!     document only declares the packages it uses.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats have a
//!     parse() and/or serialize() method, a name and file extensions. See the trait def [./format.rs]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: Concrete implementations for each supported format
//!
//! Library Choices
//!
//!     We never write a Markdown parser: comrak produces the CommonMark AST and the markdown
//!     module only adapts it to the tree. The LaTeX side has no suitable crate, so it is written
//!     here, kept small and pure.
//!
pub mod ast;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use ast::{Node, NodeKind};
pub use error::{FormatError, RenderError};
pub use format::Format;
pub use registry::FormatRegistry;
