//! JSON format implementation
//!
//! A direct serde mapping of the document tree, for trees built outside this crate or
//! for inspecting what the Markdown adapter produced. Every node is an object whose
//! `kind` field names the node kind in snake case; attributes sit next to it and
//! `children` is omitted for leaves:
//!
//! ```json
//! {
//!   "kind": "document",
//!   "children": [
//!     { "kind": "heading", "level": 1, "setext": false,
//!       "children": [{ "kind": "raw_text", "content": "Title" }] }
//!   ]
//! }
//! ```
//!
//! Unknown kinds and missing attributes are parse errors, so anything that parses is a
//! tree the renderers understand structurally.

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the JSON tree
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        output.push('\n');
        Ok(output)
    }
}
