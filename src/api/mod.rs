//! Typed client for the users directory API.
//!
//! Wraps the [`HttpClient`] seam with the two endpoints the directory
//! exposes, applying the API-key header on every request.

use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{UserDetailResponse, UserPageResponse};
use crate::traits::{Headers, HttpClient};

/// Base URL of the public demo deployment.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Key accepted by the free tier of the demo API.
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";

/// Client for the users directory endpoints.
///
/// The HTTP client is injected so tests can drive the full request path
/// without network access.
pub struct UsersApiClient {
    base_url: String,
    api_key: String,
    http: Arc<dyn HttpClient>,
}

impl UsersApiClient {
    /// Create a client against the default public deployment.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: DEFAULT_API_KEY.to_string(),
            http,
        }
    }

    /// Override the API key sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// The base URL requests are made against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(API_KEY_HEADER.to_string(), self.api_key.clone());
        headers
    }

    /// Fetch one page of the user list.
    pub async fn list_users(&self, page: u32) -> Result<UserPageResponse, FetchError> {
        let url = format!("{}/users?page={}", self.base_url, page);
        tracing::debug!(page, "requesting user page");

        let response = self.http.get(&url, &self.headers()).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                message: response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        Ok(response.json()?)
    }

    /// Fetch a single user by id.
    pub async fn get_user(&self, id: u64) -> Result<UserDetailResponse, FetchError> {
        let url = format!("{}/users/{}", self.base_url, id);
        tracing::debug!(id, "requesting user details");

        let response = self.http.get(&url, &self.headers()).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
                message: response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        Ok(response.json()?)
    }
}
