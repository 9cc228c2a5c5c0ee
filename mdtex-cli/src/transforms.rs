//! CLI-specific transforms
//!
//! This module defines the views `mdtex inspect` can produce of a Markdown file.
//! Each transform is a stage + format combination; there is a single stage, the
//! document tree handed to the LaTeX renderer.
//!
//! - `ast-treeviz`: Tree visualization with Unicode icons (default)
//! - `ast-json`: JSON representation, the same shape `--from json` accepts
//!
//! ## Extra Parameters
//!
//! Transforms can accept extra parameters via `--extra-<name> [value]`:
//!
//! - `ast-full`: When set to "true", `ast-treeviz` lists node attributes (heading
//!   level, code language, link targets). JSON output always carries them.
//!
//! Example: `mdtex inspect notes.md --extra-ast-full`

use mdtex_babel::formats::markdown::parser::parse_from_markdown;
use mdtex_babel::formats::treeviz::to_treeviz_str_with_params;
use mdtex_babel::formats::{JsonFormat, MarkdownOptions};
use mdtex_babel::{Format, FormatError};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-json", "ast-treeviz"];

/// Transform used when none is named
pub const DEFAULT_TRANSFORM: &str = "ast-treeviz";

/// Execute a named transform on Markdown source with optional extra parameters
///
/// # Arguments
///
/// * `source` - The Markdown text to transform
/// * `transform_name` - The transform to apply (e.g., "ast-treeviz")
/// * `markdown` - Options for reading the Markdown
/// * `extra_params` - Optional parameters for the transform
///
/// # Examples
///
/// ```ignore
/// let output = execute_transform("# Title\n", "ast-treeviz", &MarkdownOptions::default(), &HashMap::new())?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    markdown: &MarkdownOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    let doc = parse_from_markdown(source, markdown)?;

    match transform_name {
        "ast-treeviz" => to_treeviz_str_with_params(&doc, extra_params),
        "ast-json" => {
            let mut params = extra_params.clone();
            params.remove("ast-full");
            JsonFormat.serialize_with_options(&doc, &params)
        }
        other => Err(FormatError::NotSupported(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        ))),
    }
}
