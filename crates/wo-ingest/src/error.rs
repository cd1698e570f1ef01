//! Error types for dataset ingestion
//!
//! Two families of failure reach the caller of an ingestion run: the
//! destination directory could not be prepared, or the dataset source
//! rejected or failed the download. Neither is retried or translated on
//! the way up.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Error returned by [`crate::ingest`] and [`crate::SourceAccessor::fetch`]
#[derive(Error, Debug)]
pub enum IngestError {
    /// Creating the destination directory (or one of its parents) failed
    #[error("Failed to prepare destination directory '{}': {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset fetcher failed; passed through as-is
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Failures raised by a [`crate::DatasetFetcher`]
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid dataset handle '{0}'. Expected '<owner>/<dataset>' or '<owner>/<dataset>/versions/<number>'.")]
    InvalidHandle(String),

    #[error("Kaggle credentials not found. Set KAGGLE_USERNAME and KAGGLE_KEY, or create {0}.")]
    MissingCredentials(String),

    #[error("Invalid Kaggle credentials file '{}': {reason}", path.display())]
    Credentials { path: PathBuf, reason: String },

    #[error("Kaggle rejected the credentials (HTTP {status}). Check the username and API key.")]
    Unauthorized { status: u16 },

    #[error("Dataset '{0}' not found or not accessible with these credentials.")]
    NotFound(String),

    #[error("Rate limited by the Kaggle API. Wait before retrying.")]
    RateLimited,

    #[error("Kaggle API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read dataset archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid Kaggle client configuration: {0}")]
    Config(String),
}

/// Failures while loading an [`crate::IngestConfig`] from a file or the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Environment variable {var} is not valid UTF-8")]
    InvalidEnv { var: &'static str },
}
