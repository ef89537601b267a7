//! Configuration loading for the sgf tool.
//!
//! `defaults/sgf.default.toml` is embedded into the binary so that docs and runtime behavior
//! stay in sync. On top of those defaults, [`Loader`] layers in order:
//!
//!     1. `sgf.toml` in the working directory, when present
//!     2. a file named on the command line (`--config`), which must exist
//!     3. single command line settings such as `--format`
//!
//! and then deserializes the result into [`SgfConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/sgf.default.toml");

/// Per-directory configuration picked up by `sgf inspect`.
pub const LOCAL_CONFIG_FILE: &str = "sgf.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SgfConfig {
    pub inspect: InspectConfig,
}

/// Controls `sgf inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: String,
    pub max_label_chars: usize,
    pub show_values: bool,
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

    /// Layer `sgf.toml` from `dir` if the directory has one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        self.with_optional_file(dir.as_ref().join(LOCAL_CONFIG_FILE))
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
    pub fn build(self) -> Result<SgfConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SgfConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.inspect.format, "treeviz");
        assert_eq!(config.inspect.max_label_chars, 30);
        assert!(config.inspect.show_values);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("inspect.format", "json")
            .expect("override to apply")
            .set_override("inspect.show_values", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "json");
        assert!(!config.inspect.show_values);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn local_file_layers_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join(LOCAL_CONFIG_FILE),
            "[inspect]\nmax_label_chars = 12\n",
        )
        .expect("write local config");
        let config = Loader::new()
            .with_local_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.max_label_chars, 12);
        assert_eq!(config.inspect.format, "treeviz");
    }

    #[test]
    fn missing_required_file_fails() {
        assert!(Loader::new()
            .with_file("does/not/exist.toml")
            .build()
            .is_err());
    }
}
