use super::path::{normalize_destination, prepare_destination};
use super::DatasetFetcher;
use crate::error::Result;
use std::path::Path;
use tracing::{info, instrument};

/// Prepares the destination directory and delegates the download
pub struct SourceAccessor<F> {
    fetcher: F,
}

impl<F: DatasetFetcher> SourceAccessor<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Download `source_identifier` into `destination_directory`
    ///
    /// The directory chain is created first; if that fails the fetcher is
    /// never called. Fetcher errors are returned unchanged and nothing that
    /// was already created is removed.
    #[instrument(skip_all, fields(handle = %source_identifier))]
    pub async fn fetch(
        &self,
        source_identifier: &str,
        destination_directory: impl AsRef<Path>,
    ) -> Result<()> {
        let destination = normalize_destination(destination_directory);
        prepare_destination(&destination).await?;

        info!(destination = %destination.display(), "Fetching dataset");
        self.fetcher
            .fetch_and_extract(source_identifier, &destination)
            .await?;

        info!(destination = %destination.display(), "Dataset fetched");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::{IngestError, SourceError};
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingFetcher {
        calls: Mutex<Vec<(String, PathBuf)>>,
        reject: bool,
    }

    #[async_trait]
    impl DatasetFetcher for RecordingFetcher {
        async fn fetch_and_extract(
            &self,
            handle: &str,
            directory: &Path,
        ) -> std::result::Result<(), SourceError> {
            self.calls
                .lock()
                .unwrap()
                .push((handle.to_string(), directory.to_path_buf()));

            if self.reject {
                return Err(SourceError::Unauthorized { status: 401 });
            }
            std::fs::write(directory.join("data.csv"), "sku,qty\n")?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_normalized_directory() {
        let root = tempfile::tempdir().unwrap();
        let raw = format!("{}//wh/./raw/", root.path().display());
        let accessor = SourceAccessor::new(RecordingFetcher::default());

        accessor.fetch("acme/widgets-dataset", raw.as_str()).await.unwrap();

        let calls = accessor.fetcher().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "acme/widgets-dataset");
        assert_eq!(calls[0].1, root.path().join("wh").join("raw"));
        assert!(calls[0].1.join("data.csv").is_file());
    }

    #[tokio::test]
    async fn test_fetch_skips_fetcher_when_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let accessor = SourceAccessor::new(RecordingFetcher::default());

        let err = accessor.fetch("acme/widgets-dataset", blocker.join("raw")).await.unwrap_err();

        assert!(matches!(err, IngestError::Filesystem { .. }));
        assert!(accessor.fetcher().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_returns_fetcher_error_and_keeps_directory() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("raw");
        let accessor = SourceAccessor::new(RecordingFetcher {
            reject: true,
            ..Default::default()
        });

        let err = accessor.fetch("acme/widgets-dataset", &target).await.unwrap_err();

        assert!(matches!(err, IngestError::Source(SourceError::Unauthorized { status: 401 })));
        assert!(target.is_dir());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }
}
