//! Shared configuration loader for the sentex tools.
//!
//! `defaults/sentex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SentexConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/sentex.default.toml");

/// Top-level configuration consumed by sentex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SentexConfig {
    pub dictionary: DictionaryConfig,
    pub cipher: CipherConfig,
    pub output: OutputConfig,
}

/// Where the word dictionary comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    pub path: PathBuf,
    /// Fail instead of falling back to an empty dictionary when `path` is absent.
    pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CipherConfig {
    pub shift: u8,
}

/// Default renderings; the CLI's `--format` flags win over these.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub tree_format: String,
    pub token_format: TokenFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenFormat {
    Simple,
    Json,
}

/// Layers configuration sources over the built-in defaults. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists; a missing file leaves the layers unchanged.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml);
        self.builder = self.builder.add_source(source.required(required));
        self
    }

    /// Override a single dotted key, e.g. `dictionary.path` from `--dictionary`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize into [`SentexConfig`].
    pub fn build(self) -> Result<SentexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SentexConfig, ConfigError> {
    Loader::new().build()
}
