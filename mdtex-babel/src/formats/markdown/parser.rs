//! Markdown parsing (Markdown → document tree)
//!
//! Pipeline: Markdown string → Comrak AST → document tree

use super::MarkdownOptions;
use crate::ast::{Node, NodeKind};
use crate::error::FormatError;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into a document tree
pub fn parse_from_markdown(source: &str, options: &MarkdownOptions) -> Result<Node, FormatError> {
    let arena = Arena::new();
    let comrak_options = comrak_options(options);
    let root = parse_document(&arena, source, &comrak_options);

    let children = convert_children(root)?;
    tracing::debug!(blocks = children.len(), "parsed markdown document");
    Ok(Node::document(children))
}

fn comrak_options(options: &MarkdownOptions) -> ComrakOptions<'static> {
    let mut comrak_options = ComrakOptions::default();
    comrak_options.extension.autolink = options.autolink;
    comrak_options
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Result<Vec<Node>, FormatError> {
    let mut children = Vec::new();
    for child in node.children() {
        if let Some(converted) = convert_node(child)? {
            children.push(converted);
        }
    }
    Ok(children)
}

/// Recursively convert a comrak node.
///
/// Returns `Ok(None)` for constructs that are deliberately dropped (raw HTML).
fn convert_node<'a>(node: &'a AstNode<'a>) -> Result<Option<Node>, FormatError> {
    let data = node.data.borrow();

    let converted = match &data.value {
        NodeValue::Document => Node::document(convert_children(node)?),

        NodeValue::Paragraph => Node::paragraph(convert_children(node)?),

        NodeValue::Heading(heading) => Node::new(
            NodeKind::Heading {
                level: heading.level,
                setext: heading.setext,
            },
            convert_children(node)?,
        ),

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            Node::list(ordered, convert_children(node)?)
        }

        NodeValue::Item(_) => Node::list_item(convert_children(node)?),

        NodeValue::BlockQuote => Node::block_quote(convert_children(node)?),

        NodeValue::CodeBlock(code_block) => {
            if code_block.fenced {
                // Only the first word of the info string names the language
                let language = code_block.info.split_whitespace().next();
                Node::fenced_code(language, code_block.literal.clone())
            } else {
                Node::indented_code(code_block.literal.clone())
            }
        }

        NodeValue::ThematicBreak => Node::thematic_break(),

        NodeValue::Text(text) => Node::text(text.clone()),

        NodeValue::SoftBreak => Node::soft_break(),

        NodeValue::LineBreak => Node::hard_break(),

        NodeValue::Code(code) => Node::code_span(code.literal.clone()),

        NodeValue::Emph => Node::emphasis(convert_children(node)?),

        NodeValue::Strong => Node::strong(convert_children(node)?),

        NodeValue::Link(link) => {
            let children = convert_children(node)?;
            if is_autolink(&link.url, &children) {
                Node::leaf(NodeKind::AutoLink {
                    url: link.url.clone(),
                })
            } else {
                Node::new(
                    NodeKind::Link {
                        url: link.url.clone(),
                        title: non_empty(&link.title),
                    },
                    children,
                )
            }
        }

        NodeValue::Image(link) => {
            let mut alt = String::new();
            for child in node.children() {
                collect_text_content(child, &mut alt);
            }
            Node::leaf(NodeKind::Image {
                url: link.url.clone(),
                alt,
                title: non_empty(&link.title),
            })
        }

        NodeValue::HtmlBlock(_) | NodeValue::HtmlInline(_) => {
            tracing::warn!(
                line = data.sourcepos.start.line,
                "raw HTML is not supported in LaTeX output, skipping"
            );
            return Ok(None);
        }

        other => {
            return Err(FormatError::NotSupported(format!(
                "Markdown construct '{}' at line {} has no LaTeX mapping",
                construct_name(other),
                data.sourcepos.start.line
            )));
        }
    };

    Ok(Some(converted))
}

/// A link whose only text is its own destination, as produced by `<url>`.
fn is_autolink(url: &str, children: &[Node]) -> bool {
    match children {
        [Node {
            kind: NodeKind::RawText { content },
            ..
        }] => content == url || url.strip_prefix("mailto:") == Some(content.as_str()),
        _ => false,
    }
}

/// Variant name of a comrak node, e.g. `Table` or `Strikethrough`.
fn construct_name(value: &NodeValue) -> String {
    let debug = format!("{value:?}");
    match debug.find(|c: char| c == '(' || c == ' ' || c == '{') {
        Some(end) => debug[..end].to_string(),
        None => debug,
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Collect text content from a node (for image alt text)
fn collect_text_content<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text_content(child, output);
            }
        }
    }
}
