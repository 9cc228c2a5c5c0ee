//! Icon mapping for tree visualization
//!
//! Kept separate from the treeviz module so every view of the tree shows a
//! node kind with the same glyph.

/// Get the Unicode icon for a given node type
///
/// Returns a single Unicode character that visually represents the node type.
/// `Attribute` is used for the synthetic attribute lines of the full view.
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "List" => "☰",
        "ListItem" => "•",
        "BlockQuote" => "\"",
        "FencedCode" => "𝒱",
        "IndentedCode" => "𝒱",
        "ThematicBreak" => "⎯",
        "RawText" => "◦",
        "Emphasis" => "𝐼",
        "StrongEmphasis" => "𝐁",
        "CodeSpan" => "ƒ",
        "Link" => "⊕",
        "AutoLink" => "⊕",
        "Image" => "▣",
        "LineBreak" => "↵",
        "Attribute" => "≔",
        _ => "○",
    }
}
