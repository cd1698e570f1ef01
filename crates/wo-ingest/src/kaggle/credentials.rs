// Kaggle API credentials

use crate::error::SourceError;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const USERNAME_ENV: &str = "KAGGLE_USERNAME";
pub const KEY_ENV: &str = "KAGGLE_KEY";
pub const CONFIG_DIR_ENV: &str = "KAGGLE_CONFIG_DIR";
pub const CREDENTIALS_FILE: &str = "kaggle.json";

/// Username and API key used for HTTP basic auth against the Kaggle API
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct KaggleCredentials {
    username: String,
    key: String,
}

impl KaggleCredentials {
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            key: key.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `KAGGLE_USERNAME` and `KAGGLE_KEY`, if both are set and non-empty
    pub fn from_env() -> Option<Self> {
        let username = std::env::var(USERNAME_ENV).ok().filter(|v| !v.is_empty())?;
        let key = std::env::var(KEY_ENV).ok().filter(|v| !v.is_empty())?;
        Some(Self::new(username, key))
    }

    /// Read a `kaggle.json` file (`{"username": "...", "key": "..."}`)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let credentials: Self =
            serde_json::from_str(&content).map_err(|e| SourceError::Credentials {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if credentials.username.is_empty() || credentials.key.is_empty() {
            return Err(SourceError::Credentials {
                path: path.to_path_buf(),
                reason: "username and key must not be empty".to_string(),
            });
        }

        Ok(credentials)
    }

    /// Location of `kaggle.json`: `$KAGGLE_CONFIG_DIR`, else `~/.kaggle`
    pub fn default_file() -> Option<PathBuf> {
        std::env::var_os(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".kaggle")))
            .map(|dir| dir.join(CREDENTIALS_FILE))
    }

    /// Environment variables first, then the credentials file
    pub fn discover() -> Result<Self, SourceError> {
        if let Some(credentials) = Self::from_env() {
            debug!("Using Kaggle credentials from environment");
            return Ok(credentials);
        }

        match Self::default_file() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "Using Kaggle credentials file");
                Self::from_file(path)
            },
            Some(path) => Err(SourceError::MissingCredentials(path.display().to_string())),
            None => Err(SourceError::MissingCredentials(format!("~/.kaggle/{}", CREDENTIALS_FILE))),
        }
    }
}

impl fmt::Debug for KaggleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KaggleCredentials")
            .field("username", &self.username)
            .field("key", &"<redacted>")
            .finish()
    }
}
