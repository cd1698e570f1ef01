//! Ingestion entry point

use crate::config::IngestConfig;
use crate::error::Result;
use crate::source::{DatasetFetcher, SourceAccessor};

/// Download the configured dataset into the configured directory
pub async fn ingest<F: DatasetFetcher>(
    config: &IngestConfig,
    accessor: &SourceAccessor<F>,
) -> Result<()> {
    accessor
        .fetch(config.source_identifier(), config.destination_directory())
        .await
}
