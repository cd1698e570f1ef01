// Kaggle HTTP client

use super::config::KaggleClientConfig;
use super::credentials::KaggleCredentials;
use super::extract_zip;
use super::handle::DatasetHandle;
use crate::error::SourceError;
use crate::source::DatasetFetcher;
use async_trait::async_trait;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Response, StatusCode, Url};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

/// Longest error body echoed back in [`SourceError::Status`]
const MAX_ERROR_BODY: usize = 512;

/// Downloads datasets from the Kaggle API
pub struct KaggleClient {
    client: Client,
    credentials: KaggleCredentials,
    config: KaggleClientConfig,
}

impl KaggleClient {
    pub fn new(
        credentials: KaggleCredentials,
        config: KaggleClientConfig,
    ) -> Result<Self, SourceError> {
        config.validate().map_err(SourceError::Config)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    pub fn config(&self) -> &KaggleClientConfig {
        &self.config
    }

    /// `{base_url}/datasets/download/{owner}/{slug}[?datasetVersionNumber=N]`
    pub fn download_url(&self, handle: &DatasetHandle) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| SourceError::Config(format!("invalid base URL '{}': {}", self.config.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| SourceError::Config(format!("base URL '{}' cannot have a path", self.config.base_url)))?
            .pop_if_empty()
            .extend([
                "datasets",
                "download",
                handle.owner_or(self.credentials.username()),
                handle.slug(),
            ]);

        if let Some(version) = handle.version() {
            url.query_pairs_mut()
                .append_pair("datasetVersionNumber", &version.to_string());
        }

        Ok(url)
    }

    /// Stream the dataset archive into `directory`, returning its path
    ///
    /// The archive file is only created once the API has answered with a
    /// success status.
    pub async fn download_archive(
        &self,
        handle: &DatasetHandle,
        directory: &Path,
    ) -> Result<PathBuf, SourceError> {
        let url = self.download_url(handle)?;
        debug!(url = %url, "Requesting dataset archive");

        let response = self
            .client
            .get(url)
            .basic_auth(self.credentials.username(), Some(self.credentials.key()))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(handle, response).await);
        }

        let archive_path = directory.join(handle.archive_name());
        let progress = self.progress_bar(response.content_length(), handle);

        let mut file = tokio::fs::File::create(&archive_path).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            progress.set_position(downloaded);
        }
        file.flush().await?;
        progress.finish_and_clear();

        info!(archive = %archive_path.display(), bytes = downloaded, "Downloaded dataset archive");
        Ok(archive_path)
    }

    fn progress_bar(&self, total: Option<u64>, handle: &DatasetHandle) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(
                ProgressStyle::with_template(
                    "{msg} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            ),
            None => ProgressBar::new_spinner(),
        };
        bar.set_message(format!("Downloading {}", handle));
        bar
    }
}

#[async_trait]
impl DatasetFetcher for KaggleClient {
    #[instrument(skip(self, directory), fields(unzip = self.config.unzip))]
    async fn fetch_and_extract(&self, handle: &str, directory: &Path) -> Result<(), SourceError> {
        let handle = DatasetHandle::parse(handle)?;
        let archive = self.download_archive(&handle, directory).await?;

        if !self.config.unzip {
            return Ok(());
        }

        let (from, into) = (archive.clone(), directory.to_path_buf());
        let files = tokio::task::spawn_blocking(move || extract_zip(&from, &into))
            .await
            .map_err(std::io::Error::other)??;

        tokio::fs::remove_file(&archive).await?;
        info!(files, directory = %directory.display(), "Extracted dataset archive");
        Ok(())
    }
}

async fn status_error(handle: &DatasetHandle, response: Response) -> SourceError {
    let status = response.status();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SourceError::Unauthorized {
            status: status.as_u16(),
        },
        StatusCode::NOT_FOUND => SourceError::NotFound(handle.to_string()),
        StatusCode::TOO_MANY_REQUESTS => SourceError::RateLimited,
        _ => {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            SourceError::Status {
                status: status.as_u16(),
                body,
            }
        },
    }
}
