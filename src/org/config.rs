//! Parse options and configuration loading.
//!
//! `defaults/org-syntax.default.toml` is embedded into the crate so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`ParserConfig`], then hand
//! [`ParserConfig::options`] to the parser. Callers that do not care about files build
//! [`ParseOptions`] directly.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/org-syntax.default.toml");

/// Containers nested deeper than this keep their payload as plain text.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options accepted by [`parse_objects_with`](crate::org::inlines::parse_objects_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Added to every produced range, so ranges address the enclosing document.
    pub base_offset: usize,
    /// Attach line/column locations to every object.
    pub add_positions: bool,
    /// Line number of the first line of the parsed span (0-indexed).
    pub base_line: usize,
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_offset(mut self, base_offset: usize) -> Self {
        self.base_offset = base_offset;
        self
    }

    pub fn with_positions(mut self) -> Self {
        self.add_positions = true;
        self
    }

    pub fn with_base_line(mut self, base_line: usize) -> Self {
        self.base_line = base_line;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            base_offset: 0,
            add_positions: false,
            base_line: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Top-level configuration consumed by applications embedding the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    pub objects: ParseOptions,
}

impl ParserConfig {
    pub fn options(&self) -> ParseOptions {
        self.objects
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load parser configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("objects.max_depth must be at least 1")]
    ZeroDepth,
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

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ParserConfig, ConfigError> {
        let config: ParserConfig = self.builder.build()?.try_deserialize()?;
        if config.objects.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ParserConfig, ConfigError> {
    Loader::new().build()
}
