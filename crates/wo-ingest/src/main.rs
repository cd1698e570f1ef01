//! wo-ingest - Kaggle dataset ingestion tool

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use wo_common::logging::{init_logging, LogConfig, LogLevel};
use wo_ingest::kaggle::{
    KaggleClient, KaggleClientConfig, KaggleCredentials, DEFAULT_KAGGLE_API_URL,
};
use wo_ingest::{ingest, IngestConfig, SourceAccessor};

#[derive(Parser, Debug)]
#[command(name = "wo-ingest")]
#[command(author, version, about = "Download a Kaggle dataset into the raw data directory")]
struct Cli {
    /// TOML config file (defaults come from WO_* environment variables)
    #[arg(short, long, env = "WO_INGEST_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset handle, e.g. "owner/dataset"
    #[arg(short, long)]
    source: Option<String>,

    /// Destination directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the downloaded zip instead of extracting it
    #[arg(long)]
    no_unzip: bool,

    /// Kaggle API root
    #[arg(long, env = "KAGGLE_API_URL", default_value = DEFAULT_KAGGLE_API_URL)]
    api_url: String,

    /// Hide the download progress bar
    #[arg(short, long)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; credentials may come from elsewhere
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("wo-ingest")
        .build()
        .merge_env()?;
    let _log_guard = init_logging(&log_config)?;

    let config = match &cli.config {
        Some(path) => IngestConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => IngestConfig::from_env()?,
    }
    .with_overrides(cli.source, cli.output);

    let client_config = KaggleClientConfig::builder()
        .base_url(cli.api_url)
        .unzip(!cli.no_unzip)
        .show_progress(!cli.quiet)
        .build();
    let client = KaggleClient::new(KaggleCredentials::discover()?, client_config)?;
    let accessor = SourceAccessor::new(client);

    info!(
        source = config.source_identifier(),
        destination = %config.destination_directory().display(),
        "Ingesting dataset"
    );
    ingest(&config, &accessor).await?;

    info!("Ingestion complete");
    Ok(())
}
