//! Block rendering: paragraphs, headings, lists, code, quotes, rules.
//!
//! Sibling blocks are joined with exactly one blank line; blocks that render
//! to nothing (a paragraph left empty by dropped HTML) are skipped. Environment
//! delimiters sit on their own lines directly around their content.

use super::context::{Package, RenderContext};
use super::ensure_leaf;
use super::inline::{render_inline, render_inlines, trim_trailing_breaks};
use crate::ast::{Node, NodeKind};
use crate::error::RenderError;

/// Sectioning commands indexed by heading level - 1.
const SECTION_COMMANDS: [&str; 6] = [
    "part",
    "section",
    "subsection",
    "subsubsection",
    "paragraph",
    "subparagraph",
];

const THEMATIC_BREAK: &str = "\\noindent\\rule{\\textwidth}{1pt}";

/// Render the block children of `parent`, separated by blank lines.
pub fn render_blocks(
    parent: &'static str,
    nodes: &[Node],
    ctx: &mut RenderContext,
) -> Result<String, RenderError> {
    let mut rendered = Vec::with_capacity(nodes.len());
    for node in nodes {
        if !node.kind.is_block() {
            return Err(RenderError::UnexpectedChild {
                parent,
                child: node.node_type(),
            });
        }
        let block = render_block(node, ctx)?;
        if !block.is_empty() {
            rendered.push(block);
        }
    }
    Ok(rendered.join("\n\n"))
}

/// Render a single block node.
pub fn render_block(node: &Node, ctx: &mut RenderContext) -> Result<String, RenderError> {
    ensure_leaf(node)?;
    match &node.kind {
        NodeKind::Paragraph => {
            render_inlines("Paragraph", trim_trailing_breaks(&node.children), ctx)
        }
        NodeKind::Heading { level, .. } => {
            let command = section_command(*level)?;
            let title = render_inlines("Heading", trim_trailing_breaks(&node.children), ctx)?;
            Ok(format!("\\{command}*{{{title}}}"))
        }
        NodeKind::List { ordered } => render_list(node, *ordered, ctx),
        NodeKind::IndentedCode { literal } => Ok(environment("verbatim", None, code_body(literal))),
        NodeKind::FencedCode { language, literal } => {
            ctx.require(Package::Listings);
            let options = language
                .as_deref()
                .filter(|lang| !lang.is_empty())
                .map(|lang| format!("language={lang}"));
            Ok(environment(
                "lstlisting",
                options.as_deref(),
                code_body(literal),
            ))
        }
        NodeKind::BlockQuote => {
            ctx.require(Package::Csquotes);
            let body = render_blocks("BlockQuote", &node.children, ctx)?;
            Ok(environment("displayquote", None, &body))
        }
        NodeKind::ThematicBreak => Ok(THEMATIC_BREAK.to_string()),
        _ => Err(RenderError::UnexpectedChild {
            parent: "block content",
            child: node.node_type(),
        }),
    }
}

fn section_command(level: u8) -> Result<&'static str, RenderError> {
    match level {
        1..=6 => Ok(SECTION_COMMANDS[usize::from(level) - 1]),
        _ => Err(RenderError::InvalidHeadingLevel(level)),
    }
}

fn render_list(
    node: &Node,
    ordered: bool,
    ctx: &mut RenderContext,
) -> Result<String, RenderError> {
    let mut items = Vec::with_capacity(node.children.len());
    for child in &node.children {
        if !matches!(child.kind, NodeKind::ListItem) {
            return Err(RenderError::UnexpectedChild {
                parent: "List",
                child: child.node_type(),
            });
        }
        items.push(render_list_item(child, ctx)?);
    }

    let name = if ordered { "enumerate" } else { "itemize" };
    Ok(environment(name, None, &items.join("\n")))
}

/// `\item` followed by the item's content.
///
/// Inline children form the first line; nested blocks follow, one blank line
/// apart like any other sibling blocks.
fn render_list_item(node: &Node, ctx: &mut RenderContext) -> Result<String, RenderError> {
    let mut parts: Vec<String> = Vec::new();
    let mut line = String::new();

    for child in &node.children {
        if child.kind.is_inline() {
            line.push_str(&render_inline(child, ctx)?);
        } else if child.kind.is_block() {
            if !line.is_empty() {
                parts.push(std::mem::take(&mut line));
            }
            let block = render_block(child, ctx)?;
            if !block.is_empty() {
                parts.push(block);
            }
        } else {
            return Err(RenderError::UnexpectedChild {
                parent: "ListItem",
                child: child.node_type(),
            });
        }
    }
    if !line.is_empty() {
        parts.push(line);
    }

    if parts.is_empty() {
        Ok("\\item".to_string())
    } else {
        Ok(format!("\\item {}", parts.join("\n\n")))
    }
}

/// Wrap `body` in `\begin{name}[options]` ... `\end{name}`.
pub(crate) fn environment(name: &str, options: Option<&str>, body: &str) -> String {
    let mut out = format!("\\begin{{{name}}}");
    if let Some(options) = options {
        out.push('[');
        out.push_str(options);
        out.push(']');
    }
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str("\\end{");
    out.push_str(name);
    out.push('}');
    out
}

/// Code literals end with the newline of their last line; the environment
/// supplies that newline itself.
fn code_body(literal: &str) -> &str {
    literal.strip_suffix('\n').unwrap_or(literal)
}
