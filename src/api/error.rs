//! Error types for calls against the users API.

use thiserror::Error;

/// Errors that can occur while talking to the users API.
///
/// Views treat every variant as "operation failed"; the variants only exist
/// so each view can pick the message it shows.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered but refused the operation, or the answer lacked
    /// a field the operation depends on (e.g. a login without a token).
    #[error("{}", rejection_text(.status, .message))]
    Rejected { status: u16, message: Option<String> },

    /// The response body was not the JSON we expected.
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

fn rejection_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request rejected with status {}", status),
    }
}

impl ApiError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_server_message() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("user not found".to_string()),
        };
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn rejected_without_message_mentions_status() {
        let err = ApiError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request rejected with status 500");
        assert!(err.is_rejected());
    }

    #[test]
    fn decode_error_is_not_rejected() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::Decode {
            url: "http://x/api/users".to_string(),
            source,
        };
        assert!(!err.is_rejected());
        assert!(err.to_string().starts_with("Invalid response from 'http://x/api/users'"));
    }
}
