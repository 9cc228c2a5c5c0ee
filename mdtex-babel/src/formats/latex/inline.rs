//! Inline rendering: text runs, emphasis, code spans, links, images, breaks.

use super::context::{Package, RenderContext};
use super::escape::escape_latex;
use super::ensure_leaf;
use crate::ast::{Node, NodeKind};
use crate::error::RenderError;

/// Render a run of inline nodes that are children of `parent`.
pub fn render_inlines(
    parent: &'static str,
    nodes: &[Node],
    ctx: &mut RenderContext,
) -> Result<String, RenderError> {
    let mut output = String::new();
    for node in nodes {
        if !node.kind.is_inline() {
            return Err(RenderError::UnexpectedChild {
                parent,
                child: node.node_type(),
            });
        }
        output.push_str(&render_inline(node, ctx)?);
    }
    Ok(output)
}

/// Render a single inline node.
pub fn render_inline(node: &Node, ctx: &mut RenderContext) -> Result<String, RenderError> {
    ensure_leaf(node)?;
    match &node.kind {
        NodeKind::RawText { content } => Ok(escape_latex(content)),
        NodeKind::Emphasis => {
            let inner = render_inlines("Emphasis", &node.children, ctx)?;
            Ok(format!("\\textit{{{inner}}}"))
        }
        NodeKind::StrongEmphasis => {
            let inner = render_inlines("StrongEmphasis", &node.children, ctx)?;
            Ok(format!("\\textbf{{{inner}}}"))
        }
        NodeKind::CodeSpan { literal } => Ok(format!("\\texttt{{{}}}", escape_latex(literal))),
        NodeKind::LineBreak { hard } => {
            if *hard {
                Ok("\\\\\n".to_string())
            } else {
                Ok("\n".to_string())
            }
        }
        // The title is not representable in \href.
        NodeKind::Link { url, .. } => {
            let inner = render_inlines("Link", &node.children, ctx)?;
            Ok(format!("\\href{{{url}}}{{{inner}}}"))
        }
        NodeKind::AutoLink { url } => Ok(format!("\\url{{{url}}}")),
        NodeKind::Image { url, .. } => {
            ctx.require(Package::Graphicx);
            Ok(format!("\\includegraphics{{{url}}}"))
        }
        _ => Err(RenderError::UnexpectedChild {
            parent: "inline content",
            child: node.node_type(),
        }),
    }
}

/// Drop line breaks that end a run; they have no line left to end.
pub(crate) fn trim_trailing_breaks(nodes: &[Node]) -> &[Node] {
    let end = nodes
        .iter()
        .rposition(|node| !matches!(node.kind, NodeKind::LineBreak { .. }))
        .map_or(0, |idx| idx + 1);
    &nodes[..end]
}
