//! Import tests for Markdown format (Markdown → tree)
//!
//! These tests verify that Markdown documents are converted to the tree the LaTeX
//! renderer expects, by checking the resulting structure.

use insta::assert_snapshot;
use mdtex_babel::ast::{Node, NodeKind};
use mdtex_babel::format::Format;
use mdtex_babel::formats::markdown::{MarkdownFormat, MarkdownOptions};
use mdtex_babel::formats::treeviz::to_treeviz_str;
use mdtex_babel::FormatError;
use std::collections::HashMap;

/// Helper to parse Markdown to a document tree
fn md_to_tree(md: &str) -> Node {
    MarkdownFormat::default()
        .parse(md)
        .expect("Should parse markdown")
}

#[test]
fn test_paragraph_simple() {
    let doc = md_to_tree("This is a simple paragraph.\n");
    assert_eq!(doc.kind, NodeKind::Document);
    assert_eq!(
        doc.children,
        vec![Node::paragraph(vec![Node::text("This is a simple paragraph.")])]
    );
}

#[test]
fn test_heading_levels() {
    let doc = md_to_tree("# One\n\n###### Six\n");
    let levels: Vec<u8> = doc
        .children
        .iter()
        .filter_map(|node| match node.kind {
            NodeKind::Heading { level, .. } => Some(level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 6]);
}

#[test]
fn test_ordered_and_unordered_lists() {
    let doc = md_to_tree("- a\n- b\n\n1. c\n");
    assert_eq!(doc.children[0].kind, NodeKind::List { ordered: false });
    assert_eq!(doc.children[0].children.len(), 2);
    assert_eq!(doc.children[1].kind, NodeKind::List { ordered: true });
}

#[test]
fn test_list_items_hold_paragraphs() {
    let doc = md_to_tree("- item\n");
    let item = &doc.children[0].children[0];
    assert_eq!(item.kind, NodeKind::ListItem);
    assert_eq!(item.children, vec![Node::paragraph(vec![Node::text("item")])]);
}

#[test]
fn test_block_quote_wraps_blocks() {
    let doc = md_to_tree("> quoted\n>\n> - listed\n");
    let quote = &doc.children[0];
    assert_eq!(quote.kind, NodeKind::BlockQuote);
    assert_eq!(quote.children[0].kind, NodeKind::Paragraph);
    assert_eq!(quote.children[1].kind, NodeKind::List { ordered: false });
}

#[test]
fn test_backslash_escapes_arrive_as_text() {
    let doc = md_to_tree("\\# not a heading \\\\\n");
    assert_eq!(doc.children[0].kind, NodeKind::Paragraph);
    assert_eq!(doc.children[0].plain_text(), "# not a heading \\");
}

#[test]
fn test_thematic_break() {
    let doc = md_to_tree("a\n\n***\n\nb\n");
    assert_eq!(doc.children[1], Node::thematic_break());
}

#[test]
fn test_autolink_option_via_parameters() {
    let mut params = HashMap::new();
    params.insert("autolink".to_string(), "false".to_string());
    let doc = MarkdownFormat::default()
        .parse_with_options("www.example.com\n", &params)
        .expect("Should parse markdown");
    assert_eq!(doc.children[0].plain_text(), "www.example.com");
    assert!(doc.children[0]
        .children
        .iter()
        .all(|node| matches!(node.kind, NodeKind::RawText { .. })));
}

#[test]
fn test_bare_url_autolinks_by_default() {
    let doc = MarkdownFormat::new(MarkdownOptions { autolink: true })
        .parse("Visit https://example.com today\n")
        .expect("Should parse markdown");
    assert!(doc.children[0]
        .children
        .iter()
        .any(|node| node.kind
            == NodeKind::AutoLink {
                url: "https://example.com".to_string()
            }));
}

#[test]
fn test_unknown_parameter_is_rejected() {
    let mut params = HashMap::new();
    params.insert("tables".to_string(), "true".to_string());
    let err = MarkdownFormat::default()
        .parse_with_options("x\n", &params)
        .unwrap_err();
    assert!(matches!(err, FormatError::NotSupported(_)));
}

#[test]
fn test_tree_shape_snapshot() {
    let doc = md_to_tree("# T\n\n- *a*\n");
    let tree = to_treeviz_str(&doc);
    let lines: Vec<&str> = tree.lines().collect();
    assert_snapshot!(lines.join(" | "), @"⧉ Document (2 items) | ├─ § h1 T | │ └─ ◦ T | └─ ☰ 1 items |   └─ • a |     └─ ¶ a |       └─ 𝐼 a |         └─ ◦ a");
}
