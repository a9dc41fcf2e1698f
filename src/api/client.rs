//! HTTP client for the users API.
//!
//! Every call is a single request: no retry, no backoff. Failures are mapped
//! onto [`ApiError`] and left for the calling view to present.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{ErrorBody, LoginRequest, LoginResponse, SingleUser, User, UserPage};
use crate::config::{build_api_key_header, ApiConfig, SecureString};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/users?page=N`
    pub async fn list_users(&self, page: u32) -> Result<UserPage, ApiError> {
        let url = format!("{}/api/users?page={}", self.base_url, page);
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        if !response.status().is_success() {
            return Err(reject(response).await);
        }
        read_json(response, &url).await
    }

    /// `GET /api/users/{id}`
    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let url = self.user_url(id);
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        if !response.status().is_success() {
            return Err(reject(response).await);
        }
        let body: SingleUser = read_json(response, &url).await?;
        Ok(body.data)
    }

    /// `PUT /api/users/{id}` with the full user as body.
    ///
    /// The response representation is not used; callers keep the user they sent.
    pub async fn update_user(&self, user: &User) -> Result<(), ApiError> {
        let url = self.user_url(user.id);
        let response = self
            .send(self.request(Method::PUT, &url).json(user), &url)
            .await?;
        if !response.status().is_success() {
            return Err(reject(response).await);
        }
        Ok(())
    }

    /// `DELETE /api/users/{id}`
    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let url = self.user_url(id);
        let response = self.send(self.request(Method::DELETE, &url), &url).await?;
        if !response.status().is_success() {
            return Err(reject(response).await);
        }
        Ok(())
    }

    /// `POST /api/login`, returning the session token.
    ///
    /// A non-success status or a body without a non-empty `token` is a
    /// rejection, even when the status itself was a success.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/login", self.base_url);
        let response = self
            .send(
                self.request(Method::POST, &url)
                    .json(&LoginRequest { email, password }),
                &url,
            )
            .await?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let body = match serde_json::from_slice::<LoginResponse>(&bytes) {
            Ok(body) => body,
            Err(source) if status.is_success() => return Err(ApiError::Decode { url, source }),
            Err(_) => LoginResponse::default(),
        };

        match body.token.filter(|token| !token.is_empty()) {
            Some(token) if status.is_success() => Ok(token),
            _ => Err(ApiError::Rejected {
                status: status.as_u16(),
                message: body.error,
            }),
        }
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some((name, value)) = build_api_key_header(self.api_key.as_ref()) {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn send(&self, builder: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        tracing::debug!(url, "Sending request");
        builder.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Build a rejection from a non-success response, keeping the `error` field if any.
async fn reject(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.error),
        Err(_) => None,
    };
    ApiError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.user_url(7), "http://localhost:9000/api/users/7");
    }
}
