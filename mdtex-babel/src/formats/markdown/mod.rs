//! Markdown format implementation
//!
//! This module imports CommonMark Markdown into the document tree.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing:
//! - CommonMark compliant, with optional GFM extensions
//! - Exposes a full AST including source positions
//! - Distinguishes fenced from indented code and `#` from underline headings
//!
//! # Element Mapping Table
//!
//! | Markdown                 | Comrak Node              | Tree Node                          |
//! |--------------------------|--------------------------|------------------------------------|
//! | Paragraph                | Paragraph                | Paragraph                          |
//! | `#` / underline heading  | Heading { level, setext }| Heading { level, setext }          |
//! | `-` / `1.` list          | List + Item              | List { ordered } + ListItem        |
//! | Fenced code              | CodeBlock { fenced }     | FencedCode { language }            |
//! | Indented code            | CodeBlock                | IndentedCode                       |
//! | `>` quote                | BlockQuote               | BlockQuote                         |
//! | `***`                    | ThematicBreak            | ThematicBreak                      |
//! | `*em*` / `**strong**`    | Emph / Strong            | Emphasis / StrongEmphasis          |
//! | `` `code` ``             | Code                     | CodeSpan                           |
//! | `[text](url "title")`    | Link                     | Link { url, title }                |
//! | `<url>`                  | Link (text == url)       | AutoLink                           |
//! | `![alt](url "title")`    | Image                    | Image { url, alt, title }          |
//! | trailing spaces / `\`    | LineBreak                | LineBreak { hard: true }           |
//! | newline                  | SoftBreak                | LineBreak { hard: false }          |
//!
//! # Lossy Conversions
//!
//! - Raw HTML blocks and inline HTML are dropped (a warning is logged)
//! - Info string words after the language are dropped
//! - List start numbers, bullet characters and tightness are dropped
//!
//! Any other construct (tables, footnotes, ...) is rejected with
//! [`FormatError::NotSupported`]; the GFM extensions that produce them are never enabled.

pub mod parser;

use crate::ast::Node;
use crate::error::FormatError;
use crate::format::{parse_bool_option, reject_unknown_options, Format};
use std::collections::HashMap;

const AUTOLINK_OPTION: &str = "autolink";

/// Options for Markdown parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Recognise bare URLs (`www.example.com`, `https://…`) as links
    pub autolink: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { autolink: true }
    }
}

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parser::parse_from_markdown(source, &self.options)
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Node, FormatError> {
        reject_unknown_options(self.name(), options, &[AUTOLINK_OPTION])?;
        let mut effective = self.options.clone();
        if let Some(raw) = options.get(AUTOLINK_OPTION) {
            effective.autolink = parse_bool_option(AUTOLINK_OPTION, raw)?;
        }
        parser::parse_from_markdown(source, &effective)
    }
}
