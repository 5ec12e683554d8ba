//! Parser configuration.
//!
//! Settings can be built in code or read from the `[parser]` table of a
//! TOML file:
//!
//! ```toml
//! [parser]
//! base_type = "MyApp.Views.Page"
//! design_time = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default base class of generated templates.
pub const DEFAULT_BASE_TYPE: &str = "TemplatePage";

/// Settings for one document parse.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Base class wrapped around the model type by `@model`.
    pub base_type: String,
    /// Leave directive line terminators to the following markup.
    ///
    /// Enabled by editor tooling that re-parses single lines.
    pub design_time: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level layout of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    parser: ParserConfig,
}

impl ParserConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_type: DEFAULT_BASE_TYPE.to_owned(),
            design_time: false,
        }
    }

    /// Set the base class used by `@model`.
    #[must_use]
    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = base_type.into();
        self
    }

    /// Enable or disable design-time mode.
    #[must_use]
    pub fn with_design_time(mut self, design_time: bool) -> Self {
        self.design_time = design_time;
        self
    }

    /// Parse the `[parser]` table of a TOML document.
    ///
    /// A missing table yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.parser.validate()?;
        Ok(file.parser)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), base_type = %config.base_type, "Loaded parser config");
        Ok(config)
    }

    /// Check that all fields hold usable values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_type.trim().is_empty() {
            return Err(ConfigError::Validation(
                "parser.base_type cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}
