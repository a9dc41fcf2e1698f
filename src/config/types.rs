use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the users API.
///
/// `Debug` is implemented by hand so the API key never reaches logs.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host of the API (e.g., "https://reqres.in").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value for the `x-api-key` header. Omitted when unset or empty.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token file path. Defaults to `<data_dir>/userdeck/token`.
    #[serde(default)]
    pub token_path: Option<PathBuf>,
}

/// Log file settings. The terminal UI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Defaults to `<data_dir>/userdeck/userdeck.log`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// `EnvFilter` directive used when `USERDECK_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_base_url() -> String {
    "https://reqres.in".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_timeout() -> u32 {
    30
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            path: None,
            filter: default_log_filter(),
        }
    }
}
