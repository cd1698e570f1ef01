//! Shared helpers for wo-ingest integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use wiremock::MockServer;
use wo_ingest::kaggle::{KaggleClient, KaggleClientConfig, KaggleCredentials};
use wo_ingest::{DatasetFetcher, SourceError};
use zip::write::FileOptions;
use zip::ZipWriter;

pub const USERNAME: &str = "alice";
pub const API_KEY: &str = "0123456789abcdef";

/// Build an in-memory zip archive from `(name, contents)` pairs
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer
            .start_file(*name, FileOptions::default())
            .expect("Failed to start zip entry");
        writer
            .write_all(body.as_bytes())
            .expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

pub fn client_config(server: &MockServer) -> KaggleClientConfig {
    KaggleClientConfig::builder()
        .base_url(format!("{}/api/v1", server.uri()))
        .connect_timeout_secs(5)
        .read_timeout_secs(10)
        .show_progress(false)
        .build()
}

/// Kaggle client pointed at the mock server
pub fn kaggle_client(server: &MockServer) -> KaggleClient {
    kaggle_client_with(client_config(server))
}

pub fn kaggle_client_with(config: KaggleClientConfig) -> KaggleClient {
    KaggleClient::new(KaggleCredentials::new(USERNAME, API_KEY), config)
        .expect("Failed to build Kaggle client")
}

/// Sorted file names directly inside `dir`
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Failed to read entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Fetcher that writes fixed files and records every call
#[derive(Default)]
pub struct StubFetcher {
    pub files: Vec<(&'static str, &'static str)>,
    pub calls: Mutex<Vec<(String, PathBuf)>>,
}

impl StubFetcher {
    pub fn writing(files: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            files,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

#[async_trait]
impl DatasetFetcher for StubFetcher {
    async fn fetch_and_extract(&self, handle: &str, directory: &Path) -> Result<(), SourceError> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push((handle.to_string(), directory.to_path_buf()));

        if handle.trim().is_empty() {
            return Err(SourceError::InvalidHandle(handle.to_string()));
        }
        for (name, body) in &self.files {
            std::fs::write(directory.join(name), body)?;
        }
        Ok(())
    }
}
