//! Client for the external users API.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{LoginRequest, User, UserPage};
