use serde::{Deserialize, Serialize};

/// A user record as served by the external API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of `GET /api/users?page=N`.
///
/// Only `data` is required; `total_pages` bounds forward paging when present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub total_pages: Option<u32>,
    pub data: Vec<User>,
}

/// Envelope of `GET /api/users/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SingleUser {
    pub data: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/login`: `{ token }` on success, `{ error }` otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic `{ error }` body returned alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
