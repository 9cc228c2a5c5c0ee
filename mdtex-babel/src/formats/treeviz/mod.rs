//! Treeviz formatter for document trees
//!
//! Treeviz is a visual representation of the tree, meant for inspecting what the Markdown
//! adapter produced before it reaches the LaTeX renderer.
//!
//! It encodes the node structure with box drawing connectors, two columns per level of nesting.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (3 items)
//! ├─ § h1 Introduction
//! │ └─ ◦ Introduction
//! ├─ ¶ Some *emphasised* text
//! │ ├─ ◦ Some
//! │ ├─ 𝐼 emphasised
//! │ │ └─ ◦ emphasised
//! │ └─ ◦  text
//! └─ ☰ 2 items
//!   ├─ • one
//!   │ └─ ¶ one
//!   │   └─ ◦ one
//!   └─ • two
//!     └─ ¶ two
//!       └─ ◦ two
//!
//! With `ast-full` every attribute of a node (heading level, code language, link title, ...)
//! is listed as a `≔ key=value` line before its children.

use super::icons::get_icon;
use crate::ast::{Node, NodeKind};
use crate::error::FormatError;
use crate::format::{parse_bool_option, reject_unknown_options, Format};
use std::collections::HashMap;

const AST_FULL_OPTION: &str = "ast-full";

/// Attributes of a node as `key=value` pairs, in a stable order.
fn attributes(node: &Node) -> Vec<String> {
    match &node.kind {
        NodeKind::Heading { level, setext } => {
            vec![format!("level={level}"), format!("setext={setext}")]
        }
        NodeKind::List { ordered } => vec![format!("ordered={ordered}")],
        NodeKind::FencedCode { language, .. } => vec![format!(
            "language={}",
            language.as_deref().unwrap_or("")
        )],
        NodeKind::Link { url, title } => {
            let mut attrs = vec![format!("url={url}")];
            if let Some(title) = title {
                attrs.push(format!("title={title}"));
            }
            attrs
        }
        NodeKind::AutoLink { url } => vec![format!("url={url}")],
        NodeKind::Image { url, alt, title } => {
            let mut attrs = vec![format!("url={url}"), format!("alt={alt}")];
            if let Some(title) = title {
                attrs.push(format!("title={title}"));
            }
            attrs
        }
        NodeKind::LineBreak { hard } => vec![format!("hard={hard}")],
        _ => Vec::new(),
    }
}

/// Format a single node and, recursively, its children
fn format_node(
    node: &Node,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    include_all: bool,
) -> String {
    let mut output = String::new();
    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type()),
        node.display_label()
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });

    if include_all {
        let attrs = attributes(node);
        let attr_icon = get_icon("Attribute");
        for (i, attr) in attrs.iter().enumerate() {
            let attr_connector = if i == attrs.len() - 1 && node.children.is_empty() {
                "└─"
            } else {
                "├─"
            };
            output.push_str(&format!(
                "{child_prefix}{attr_connector} {attr_icon} {attr}\n"
            ));
        }
    }

    output + &format_children(&node.children, &child_prefix, include_all)
}

fn format_children(children: &[Node], prefix: &str, include_all: bool) -> String {
    let mut output = String::new();
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        output.push_str(&format_node(child, prefix, i, child_count, include_all));
    }
    output
}

pub fn to_treeviz_str(doc: &Node) -> String {
    render_tree(doc, false)
}

/// Convert a document to treeviz string with optional parameters
///
/// # Parameters
///
/// - `"ast-full"`: When set to `"true"`, lists node attributes (heading level, list
///   ordering, code language, link and image targets, break kind) as extra lines.
pub fn to_treeviz_str_with_params(
    doc: &Node,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    reject_unknown_options("treeviz", params, &[AST_FULL_OPTION])?;
    let include_all = match params.get(AST_FULL_OPTION) {
        Some(raw) => parse_bool_option(AST_FULL_OPTION, raw)?,
        None => false,
    };
    Ok(render_tree(doc, include_all))
}

fn render_tree(doc: &Node, include_all: bool) -> String {
    let icon = get_icon(doc.node_type());
    let output = match doc.kind {
        NodeKind::Document => format!("{} Document ({} items)\n", icon, doc.children.len()),
        _ => format!("{} {} {}\n", icon, doc.node_type(), doc.display_label()),
    };
    output + &format_children(&doc.children, "", include_all)
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        to_treeviz_str_with_params(doc, options)
    }
}
