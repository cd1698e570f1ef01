//! Warehouse Optimizer Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Fetches the raw dataset that downstream warehouse stages work from.
//!
//! - **Configuration**: [`IngestConfig`] names the dataset and the raw data
//!   directory
//! - **Source access**: [`SourceAccessor`] creates the directory and calls a
//!   [`DatasetFetcher`]
//! - **Kaggle**: [`kaggle::KaggleClient`] is the production fetcher
//! - **Entry point**: [`ingest`] ties the configuration to an accessor
//!
//! # Example
//!
//! ```no_run
//! use wo_ingest::kaggle::{KaggleClient, KaggleClientConfig, KaggleCredentials};
//! use wo_ingest::{ingest, IngestConfig, SourceAccessor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let credentials = KaggleCredentials::discover()?;
//!     let accessor = SourceAccessor::new(KaggleClient::new(credentials, KaggleClientConfig::default())?);
//!
//!     ingest(&IngestConfig::from_env()?, &accessor).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ingest;
pub mod kaggle;
pub mod source;

// Re-export commonly used types
pub use config::IngestConfig;
pub use error::{ConfigError, IngestError, Result, SourceError};
pub use ingest::ingest;
pub use source::{DatasetFetcher, SourceAccessor};
