//! Kaggle dataset source
//!
//! Downloads dataset archives from the Kaggle public API and unpacks them:
//!
//! - [`DatasetHandle`]: parses `owner/dataset[/versions/N]`
//! - [`KaggleCredentials`]: username and API key, from the environment or
//!   `kaggle.json`
//! - [`KaggleClient`]: HTTP download plus zip extraction, implementing
//!   [`crate::DatasetFetcher`]
//!
//! # Example
//!
//! ```no_run
//! use wo_ingest::kaggle::{KaggleClient, KaggleClientConfig, KaggleCredentials};
//! use wo_ingest::{ingest, IngestConfig, SourceAccessor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KaggleClient::new(KaggleCredentials::discover()?, KaggleClientConfig::default())?;
//!     let accessor = SourceAccessor::new(client);
//!
//!     ingest(&IngestConfig::new("acme/widgets-dataset", "data/raw"), &accessor).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod extract;
mod handle;

pub use client::KaggleClient;
pub use config::{KaggleClientConfig, KaggleClientConfigBuilder, DEFAULT_KAGGLE_API_URL};
pub use credentials::KaggleCredentials;
pub use extract::extract_zip;
pub use handle::DatasetHandle;
