// Kaggle client configuration

/// Public Kaggle REST API root.
pub const DEFAULT_KAGGLE_API_URL: &str = "https://www.kaggle.com/api/v1";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Longest silence tolerated between two reads of the response.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 300;

/// Configuration for [`super::KaggleClient`]
///
/// There is no cap on the total request time: a large archive on a slow
/// link streams for as long as data keeps arriving.
#[derive(Debug, Clone)]
pub struct KaggleClientConfig {
    /// API root, e.g. "https://www.kaggle.com/api/v1"
    pub base_url: String,

    /// Seconds allowed to establish the connection
    pub connect_timeout_secs: u64,

    /// Seconds allowed between reads; resets whenever data arrives
    pub read_timeout_secs: u64,

    /// Extract the archive and delete it afterwards
    pub unzip: bool,

    /// Draw a progress bar while downloading
    pub show_progress: bool,

    pub user_agent: String,
}

impl Default for KaggleClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_KAGGLE_API_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
            unzip: true,
            show_progress: true,
            user_agent: format!("wo-ingest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl KaggleClientConfig {
    pub fn builder() -> KaggleClientConfigBuilder {
        KaggleClientConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if self.read_timeout_secs == 0 {
            return Err("Read timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct KaggleClientConfigBuilder {
    config: KaggleClientConfig,
}

impl KaggleClientConfigBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn connect_timeout_secs(mut self, secs: u64) -> Self {
        self.config.connect_timeout_secs = secs;
        self
    }

    pub fn read_timeout_secs(mut self, secs: u64) -> Self {
        self.config.read_timeout_secs = secs;
        self
    }

    pub fn unzip(mut self, unzip: bool) -> Self {
        self.config.unzip = unzip;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> KaggleClientConfig {
        self.config
    }
}
