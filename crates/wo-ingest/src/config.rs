//! Ingestion configuration
//!
//! Holds the dataset handle to download and the directory it lands in.
//! Values are fixed once constructed; nothing here validates them.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Dataset fetched when nothing else is configured.
pub const DEFAULT_SOURCE_IDENTIFIER: &str = "mustafakeser4/sap-dataset-bigquery-dataset";

/// Raw data directory, relative to the working directory.
pub const DEFAULT_RAW_DATA_PATH: &str = "data/raw";

/// Environment variable overriding the dataset handle.
pub const SOURCE_IDENTIFIER_ENV: &str = "WO_SOURCE_IDENTIFIER";

/// Environment variable overriding the destination directory.
pub const RAW_DATA_PATH_ENV: &str = "WO_RAW_DATA_PATH";

/// What to download and where to put it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    source_identifier: String,
    destination_directory: PathBuf,
}

impl IngestConfig {
    /// `destination_directory` accepts `&str`, `String`, `&Path` or `PathBuf`.
    pub fn new(
        source_identifier: impl Into<String>,
        destination_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            destination_directory: destination_directory.into(),
        }
    }

    /// Defaults, overridden by `WO_SOURCE_IDENTIFIER` and `WO_RAW_DATA_PATH`
    ///
    /// A handle that is set but not valid UTF-8 is an error rather than a
    /// silent fallback to the default dataset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let source_identifier = match std::env::var_os(SOURCE_IDENTIFIER_ENV) {
            Some(value) => value.into_string().map_err(|_| ConfigError::InvalidEnv {
                var: SOURCE_IDENTIFIER_ENV,
            })?,
            None => defaults.source_identifier,
        };
        let destination_directory = std::env::var_os(RAW_DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.destination_directory);

        Ok(Self::new(source_identifier, destination_directory))
    }

    /// Load from a TOML file; absent keys take their defaults
    ///
    /// ```toml
    /// source_identifier = "acme/widgets-dataset"
    /// destination_directory = "/srv/warehouse/raw"
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Return a new config with the given values replacing the current ones
    pub fn with_overrides(
        self,
        source_identifier: Option<String>,
        destination_directory: Option<PathBuf>,
    ) -> Self {
        Self {
            source_identifier: source_identifier.unwrap_or(self.source_identifier),
            destination_directory: destination_directory.unwrap_or(self.destination_directory),
        }
    }

    pub fn source_identifier(&self) -> &str {
        &self.source_identifier
    }

    pub fn destination_directory(&self) -> &Path {
        &self.destination_directory
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_IDENTIFIER, DEFAULT_RAW_DATA_PATH)
    }
}
