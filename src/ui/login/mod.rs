//! Login screen: credentials form posting to `/api/login`.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{LoginField, LoginState};
pub use view::render_login;

use crate::api::ApiError;

pub const REQUIRED_MESSAGE: &str = "Both fields are required!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials: Login Failed!!";
pub const GENERIC_FAILURE: &str = "Something went wrong!";

/// Message shown for a failed login.
///
/// Server-provided text wins; a rejection without one (including a success
/// status lacking a token) gets the invalid-credentials fallback.
pub fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected {
            message: Some(message),
            ..
        } if !message.is_empty() => message.clone(),
        ApiError::Rejected { .. } => INVALID_CREDENTIALS.to_string(),
        other => {
            let text = other.to_string();
            if text.is_empty() {
                GENERIC_FAILURE.to_string()
            } else {
                text
            }
        }
    }
}
