//! Authentication token and the currently loaded page of users.

mod storage;
mod store;

use std::path::PathBuf;
use thiserror::Error;

pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
pub use store::SessionStore;

/// Errors raised while persisting or restoring the session token.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Token storage at '{path}' failed: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
