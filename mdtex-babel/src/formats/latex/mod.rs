//! LaTeX format implementation
//!
//! This module renders a document tree into LaTeX source. It is a pure, single pass fold over
//! the tree: nothing is read or written outside the returned string, and the only state is
//! the [`RenderContext`] created for each call.
//!
//! # Element Mapping Table
//!
//! | Node             | LaTeX                                         | Notes                                  |
//! |------------------|-----------------------------------------------|----------------------------------------|
//! | Paragraph        | inline content on its own line(s)             |                                        |
//! | Heading 1-6      | `\part*` `\section*` ... `\subparagraph*`     | `#` and underline syntax map the same  |
//! | List             | `itemize` / `enumerate`                       | one `\item` per ListItem               |
//! | IndentedCode     | `verbatim`                                    | literal, not escaped                   |
//! | FencedCode       | `lstlisting` with `[language=...]`            | needs `listings`                       |
//! | BlockQuote       | `displayquote`                                | needs `csquotes`                       |
//! | ThematicBreak    | `\noindent\rule{\textwidth}{1pt}`             |                                        |
//! | Emphasis         | `\textit{...}`                                |                                        |
//! | StrongEmphasis   | `\textbf{...}`                                |                                        |
//! | CodeSpan         | `\texttt{...}`                                | content escaped, not rendered          |
//! | Link             | `\href{url}{...}`                             | url raw, title dropped                 |
//! | AutoLink         | `\url{url}`                                   |                                        |
//! | Image            | `\includegraphics{url}`                       | needs `graphicx`, alt/title dropped    |
//! | LineBreak        | hard: `\\` + newline, soft: newline           | dropped at the end of a paragraph      |
//! | RawText          | escaped text                                  | see [`escape_latex`]                   |
//!
//! # Layout
//!
//! Sibling blocks, including the blocks inside one list item, are separated by exactly one blank
//! line; blocks that render to nothing are skipped. List items are separated by a single
//! newline. Environments put `\begin` and `\end` on their own lines around the content.
//!
//! # Errors
//!
//! Trees that violate the structure guaranteed by a well-behaved parser (a block inside a
//! heading, a paragraph directly inside a list, a heading level of 7, ...) fail with a
//! [`RenderError`] instead of producing partial output.

mod block;
mod context;
mod document;
mod escape;
mod inline;

pub use block::{render_block, render_blocks};
pub use context::{Package, RenderContext};
pub use document::{render_body, render_document};
pub use escape::escape_latex;
pub use inline::{render_inline, render_inlines};

use crate::ast::Node;
use crate::error::{FormatError, RenderError};
use crate::format::{parse_bool_option, reject_unknown_options, Format};
use std::collections::HashMap;

const STANDALONE_OPTION: &str = "standalone";

/// Options for LaTeX serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexOptions {
    /// Emit a complete document (preamble and `document` environment).
    /// When false only the rendered body is returned.
    pub standalone: bool,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self { standalone: true }
    }
}

/// Serialize a document tree to a complete LaTeX document
pub fn serialize_to_latex(doc: &Node) -> Result<String, FormatError> {
    serialize_to_latex_with_options(doc, &LatexOptions::default())
}

/// Serialize a document tree to LaTeX with full options
pub fn serialize_to_latex_with_options(
    doc: &Node,
    options: &LatexOptions,
) -> Result<String, FormatError> {
    if options.standalone {
        return Ok(render_document(doc)?);
    }
    let mut ctx = RenderContext::new();
    let mut body = render_body(doc, &mut ctx)?;
    body.push('\n');
    Ok(body)
}

/// Fail if a leaf kind carries children.
pub(crate) fn ensure_leaf(node: &Node) -> Result<(), RenderError> {
    if !node.kind.is_leaf() || node.children.is_empty() {
        Ok(())
    } else {
        Err(RenderError::UnexpectedChildren {
            kind: node.node_type(),
            count: node.children.len(),
        })
    }
}

/// Format implementation for LaTeX
#[derive(Debug, Clone, Default)]
pub struct LatexFormat {
    options: LatexOptions,
}

impl LatexFormat {
    pub fn new(options: LatexOptions) -> Self {
        Self { options }
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX article source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex", "latex"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Node) -> Result<String, FormatError> {
        serialize_to_latex_with_options(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Node,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        reject_unknown_options(self.name(), options, &[STANDALONE_OPTION])?;
        let mut effective = self.options.clone();
        if let Some(raw) = options.get(STANDALONE_OPTION) {
            effective.standalone = parse_bool_option(STANDALONE_OPTION, raw)?;
        }
        serialize_to_latex_with_options(doc, &effective)
    }
}
