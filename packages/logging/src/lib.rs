//! Process-wide logger setup for the `resbundler` tools.
//!
//! The env filter is resolved at compile time from `RESBUNDLER_LOG`, then
//! `RUST_LOG`, falling back to a build-profile dependent default.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use free_log_client::FreeLogLayer;
pub use log;
use thiserror::Error;

pub use free_log_client;

#[cfg(feature = "macros")]
mod macros;

/// Resolves a compile-time environment variable, falling back to `$default`.
#[macro_export]
macro_rules! default_env {
    ($name:expr, $default:expr $(,)?) => {
        match option_env!($name) {
            Some(v) => v,
            None => $default,
        }
    };
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Logs(#[from] free_log_client::LogsInitError),
    #[error(transparent)]
    BuildLogsConfig(#[from] free_log_client::BuildLogsConfigError),
    #[error(transparent)]
    BuildFileWriterConfig(#[from] free_log_client::BuildFileWriterConfigError),
}

/// Installs the global logger.
///
/// When `log_file` is given, everything at `Debug` and above is additionally
/// written to that file.
///
/// # Errors
///
/// * If the file writer could not be configured
/// * If the global logger was already initialized
pub fn init(log_file: Option<&Path>) -> Result<FreeLogLayer, InitError> {
    #[cfg(debug_assertions)]
    const DEFAULT_LOG_LEVEL: &str = "resbundler=trace";
    #[cfg(not(debug_assertions))]
    const DEFAULT_LOG_LEVEL: &str = "resbundler=info";

    let mut logs_config = free_log_client::LogsConfig::builder();

    if let Some(log_file) = log_file {
        logs_config = logs_config.with_file_writer(
            free_log_client::FileWriterConfig::builder()
                .file_path(log_file.to_path_buf())
                .log_level(free_log_client::Level::Debug),
        )?;
    }

    let layer = free_log_client::init(logs_config.env_filter(default_env!(
        "RESBUNDLER_LOG",
        default_env!("RUST_LOG", DEFAULT_LOG_LEVEL)
    )))?;

    Ok(layer)
}
