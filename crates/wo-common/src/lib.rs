//! Warehouse Optimizer Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the warehouse-optimizer workspace members.
//!
//! At the moment this is the logging layer: every binary in the workspace
//! configures `tracing` through [`logging::LogConfig`] so that console and
//! file output behave the same way everywhere.
//!
//! # Example
//!
//! ```no_run
//! use wo_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel, LogOutput};
