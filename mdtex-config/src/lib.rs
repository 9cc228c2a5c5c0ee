//! Shared configuration loader for the mdtex toolchain.
//!
//! `defaults/mdtex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdtexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdtex_babel::formats::{LatexOptions, MarkdownOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdtex.default.toml");

/// Top-level configuration consumed by mdtex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdtexConfig {
    pub markdown: MarkdownConfig,
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
}

/// Knobs for reading Markdown input.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub autolink: bool,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            autolink: config.autolink,
        }
    }
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub latex: LatexConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatexConfig {
    pub standalone: bool,
}

impl From<&LatexConfig> for LatexOptions {
    fn from(config: &LatexConfig) -> Self {
        LatexOptions {
            standalone: config.standalone,
        }
    }
}

/// Controls AST-related inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub ast: InspectAstConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectAstConfig {
    pub include_all_properties: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdtexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdtexConfig, ConfigError> {
    Loader::new().build()
}
