use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var that overrides the configured filter.
pub const LOG_ENV: &str = "USERDECK_LOG";

/// Filter directive: `USERDECK_LOG`, then `RUST_LOG`, then the config value.
pub fn filter_directive(config: &LoggingConfig) -> String {
    std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.filter.clone())
}

/// Initialize tracing, appending to the configured log file.
///
/// The terminal UI owns stdout, so nothing is ever written there. Returns the
/// log file path.
pub fn init(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = config.resolved_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(filter_directive(config))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|err| io::Error::other(err.to_string()))?;

    Ok(path)
}
