//! Dataset source access
//!
//! [`SourceAccessor`] makes sure the destination directory exists and then
//! hands the download over to a [`DatasetFetcher`]. The fetcher is the only
//! place that knows about a concrete platform; everything above it works
//! with a handle string and a directory.

mod accessor;
mod path;

pub use accessor::SourceAccessor;
pub use path::{normalize_destination, prepare_destination};

use crate::error::SourceError;
use async_trait::async_trait;
use std::path::Path;

/// Downloads a dataset and unpacks it into a directory
///
/// Implementations own their credentials and client state; callers only
/// pass the handle and an existing directory.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    /// Fetch the dataset named by `handle` and extract it into `directory`
    async fn fetch_and_extract(&self, handle: &str, directory: &Path) -> Result<(), SourceError>;
}
