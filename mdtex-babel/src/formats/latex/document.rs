//! Document wrapper: preamble, package declarations and the document environment.

use super::block::{environment, render_blocks};
use super::context::RenderContext;
use crate::ast::{Node, NodeKind};
use crate::error::RenderError;

const DOCUMENT_CLASS: &str = "\\documentclass{article}";

/// Render the blocks of a `Document` root, recording package needs in `ctx`.
pub fn render_body(doc: &Node, ctx: &mut RenderContext) -> Result<String, RenderError> {
    if !matches!(doc.kind, NodeKind::Document) {
        return Err(RenderError::NotADocument {
            found: doc.node_type(),
        });
    }
    render_blocks("Document", &doc.children, ctx)
}

/// Render a complete, compilable LaTeX document.
///
/// The body is rendered first so that only the packages it actually uses
/// are declared in the preamble.
pub fn render_document(doc: &Node) -> Result<String, RenderError> {
    let mut ctx = RenderContext::new();
    let body = render_body(doc, &mut ctx)?;

    let mut output = String::with_capacity(body.len() + 128);
    output.push_str(DOCUMENT_CLASS);
    output.push('\n');
    for package in ctx.packages() {
        output.push_str("\\usepackage{");
        output.push_str(package.name());
        output.push_str("}\n");
    }
    output.push_str(&environment("document", None, &body));
    output.push('\n');
    Ok(output)
}
