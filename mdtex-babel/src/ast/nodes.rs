//! Core data structures for the document tree.

use serde::{Deserialize, Serialize};

/// Maximum number of characters shown by [`Node::display_label`].
const LABEL_WIDTH: usize = 30;

/// A node of the document tree: its kind (with attributes) and ordered children.
///
/// Leaf kinds (text, code, breaks, images, rules) keep `children` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The closed set of node kinds understood by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Document,
    Paragraph,
    /// `setext` marks the underline (`===` / `---`) syntax.
    Heading {
        level: u8,
        #[serde(default)]
        setext: bool,
    },
    Emphasis,
    StrongEmphasis,
    CodeSpan {
        literal: String,
    },
    FencedCode {
        #[serde(default)]
        language: Option<String>,
        literal: String,
    },
    IndentedCode {
        literal: String,
    },
    List {
        ordered: bool,
    },
    ListItem,
    Link {
        url: String,
        #[serde(default)]
        title: Option<String>,
    },
    /// A bare URL written as `<https://…>`
    AutoLink {
        url: String,
    },
    Image {
        url: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        title: Option<String>,
    },
    BlockQuote,
    ThematicBreak,
    LineBreak {
        hard: bool,
    },
    RawText {
        content: String,
    },
}

impl NodeKind {
    /// Stable name of the kind, used in diagnostics and tree views.
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Heading { .. } => "Heading",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::StrongEmphasis => "StrongEmphasis",
            NodeKind::CodeSpan { .. } => "CodeSpan",
            NodeKind::FencedCode { .. } => "FencedCode",
            NodeKind::IndentedCode { .. } => "IndentedCode",
            NodeKind::List { .. } => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Link { .. } => "Link",
            NodeKind::AutoLink { .. } => "AutoLink",
            NodeKind::Image { .. } => "Image",
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::LineBreak { .. } => "LineBreak",
            NodeKind::RawText { .. } => "RawText",
        }
    }

    /// Whether the kind lives inside a line of text.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Emphasis
                | NodeKind::StrongEmphasis
                | NodeKind::CodeSpan { .. }
                | NodeKind::Link { .. }
                | NodeKind::AutoLink { .. }
                | NodeKind::Image { .. }
                | NodeKind::LineBreak { .. }
                | NodeKind::RawText { .. }
        )
    }

    /// Whether the kind occupies its own vertical extent.
    ///
    /// `Document` and `ListItem` are neither block nor inline: they are only
    /// valid as the root and as the children of a `List` respectively.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph
                | NodeKind::Heading { .. }
                | NodeKind::FencedCode { .. }
                | NodeKind::IndentedCode { .. }
                | NodeKind::List { .. }
                | NodeKind::BlockQuote
                | NodeKind::ThematicBreak
        )
    }

    /// Whether the kind must not carry children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::CodeSpan { .. }
                | NodeKind::FencedCode { .. }
                | NodeKind::IndentedCode { .. }
                | NodeKind::AutoLink { .. }
                | NodeKind::Image { .. }
                | NodeKind::ThematicBreak
                | NodeKind::LineBreak { .. }
                | NodeKind::RawText { .. }
        )
    }
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Node { kind, children }
    }

    pub fn leaf(kind: NodeKind) -> Self {
        Node::new(kind, Vec::new())
    }

    pub fn document(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Document, children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Paragraph, children)
    }

    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::new(
            NodeKind::Heading {
                level,
                setext: false,
            },
            children,
        )
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::new(NodeKind::Emphasis, children)
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::new(NodeKind::StrongEmphasis, children)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::leaf(NodeKind::RawText {
            content: content.into(),
        })
    }

    pub fn code_span(literal: impl Into<String>) -> Self {
        Node::leaf(NodeKind::CodeSpan {
            literal: literal.into(),
        })
    }

    pub fn fenced_code(language: Option<&str>, literal: impl Into<String>) -> Self {
        Node::leaf(NodeKind::FencedCode {
            language: language.map(str::to_string),
            literal: literal.into(),
        })
    }

    pub fn indented_code(literal: impl Into<String>) -> Self {
        Node::leaf(NodeKind::IndentedCode {
            literal: literal.into(),
        })
    }

    pub fn list(ordered: bool, items: Vec<Node>) -> Self {
        Node::new(NodeKind::List { ordered }, items)
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::new(NodeKind::ListItem, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(
            NodeKind::Link {
                url: url.into(),
                title: None,
            },
            children,
        )
    }

    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Node::leaf(NodeKind::Image {
            url: url.into(),
            alt: alt.into(),
            title: None,
        })
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::new(NodeKind::BlockQuote, children)
    }

    pub fn thematic_break() -> Self {
        Node::leaf(NodeKind::ThematicBreak)
    }

    pub fn hard_break() -> Self {
        Node::leaf(NodeKind::LineBreak { hard: true })
    }

    pub fn soft_break() -> Self {
        Node::leaf(NodeKind::LineBreak { hard: false })
    }

    pub fn node_type(&self) -> &'static str {
        self.kind.node_type()
    }

    /// Concatenated text of this node and its descendants, breaks as spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_plain_text(self, &mut out);
        out
    }

    /// Short human label for tree views, truncated to a fixed width.
    pub fn display_label(&self) -> String {
        let label = match &self.kind {
            NodeKind::Document => format!("{} items", self.children.len()),
            NodeKind::List { .. } => format!("{} items", self.children.len()),
            NodeKind::Heading { level, .. } => format!("h{level} {}", self.plain_text()),
            NodeKind::FencedCode { literal, .. } | NodeKind::IndentedCode { literal } => {
                let lines = literal.lines().count();
                format!("{lines} lines")
            }
            NodeKind::Link { url, .. } | NodeKind::AutoLink { url } => url.clone(),
            NodeKind::Image { url, .. } => url.clone(),
            NodeKind::ThematicBreak => "---".to_string(),
            NodeKind::LineBreak { hard } => {
                if *hard {
                    "hard".to_string()
                } else {
                    "soft".to_string()
                }
            }
            _ => self.plain_text(),
        };
        truncate(&label, LABEL_WIDTH)
    }
}

fn collect_plain_text(node: &Node, out: &mut String) {
    match &node.kind {
        NodeKind::RawText { content } => out.push_str(content),
        NodeKind::CodeSpan { literal } => out.push_str(literal),
        NodeKind::LineBreak { .. } => out.push(' '),
        _ => {
            for child in &node.children {
                collect_plain_text(child, out);
            }
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width - 1).collect();
        out.push('…');
        out
    }
}
