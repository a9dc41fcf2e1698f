mod credentials;
mod loader;
mod types;

pub use credentials::{build_api_key_header, SecureString, API_KEY_HEADER};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, SessionConfig};
