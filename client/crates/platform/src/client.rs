//! Booking API HTTP client
//!
//! Thin wrapper over `reqwest` that resolves paths against the API base URL,
//! attaches the stored credential as a bearer token, and turns non-2xx
//! responses into errors carrying the server's own message.

use std::sync::Arc;
use std::time::Duration;

use kernel::error::app_error::AppError;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Supplies the bearer token for outgoing requests
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// HTTP client errors
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The API could not be reached or the exchange failed mid-way
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body did not have the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl From<ApiClientError> for AppError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Status { status, message } => AppError::from_status(status, message),
            ApiClientError::Transport(e) => AppError::from(e),
            ApiClientError::Decode(msg) => AppError::internal(msg),
            ApiClientError::Config(msg) => AppError::internal(msg),
        }
    }
}

/// Raw response: status plus body text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body. An empty body reads as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiClientError> {
        let text = if self.body.trim().is_empty() {
            "null"
        } else {
            self.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| ApiClientError::Decode(e.to_string()))
    }

    /// Human-readable message the server put in the body, if any
    pub fn server_message(&self) -> Option<String> {
        server_message(&self.body)
    }

    /// Turn a non-success response into [`ApiClientError::Status`]
    pub fn error_for_status(self, fallback: &str) -> Result<Self, ApiClientError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ApiClientError::Status {
            status: self.status.as_u16(),
            message: self.server_message().unwrap_or_else(|| fallback.to_string()),
        })
    }
}

/// Extract a message from an API error body.
///
/// Recognizes a bare JSON string, an object with `message`, `title` or
/// `error`, and otherwise returns the trimmed body verbatim.
pub fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(s)) => (!s.trim().is_empty()).then_some(s),
        Ok(Value::Object(map)) => ["message", "title", "error"]
            .iter()
            .find_map(|field| match map.get(*field) {
                Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                _ => None,
            })
            .or_else(|| Some(trimmed.to_string())),
        _ => Some(trimmed.to_string()),
    }
}

/// Booking API client
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token_source", &self.tokens.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `https://host/api`).
    ///
    /// No timeout is applied unless one is given; the API's own limits
    /// bound the worst case.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiClientError::Config(format!(
                "API base URL must be http(s): {base_url:?}"
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            tokens: None,
        })
    }

    /// Attach the source of bearer tokens
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, with the bearer header when a token is stored
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.as_ref().and_then(|t| t.bearer_token()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and read the full body regardless of status
    pub async fn send(&self, builder: RequestBuilder) -> Result<ApiResponse, ApiClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        tracing::debug!(%status, path = %url, "API response");
        Ok(ApiResponse { status, body })
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiClientError> {
        self.send(self.request(Method::GET, path))
            .await?
            .error_for_status(fallback)?
            .json()
    }

    pub async fn get_json_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        fallback: &str,
    ) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query))
            .await?
            .error_for_status(fallback)?
            .json()
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body))
            .await?
            .error_for_status(fallback)?
            .json()
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body))
            .await?
            .error_for_status(fallback)?
            .json()
    }

    pub async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiClientError> {
        self.send(self.request(Method::DELETE, path))
            .await?
            .error_for_status(fallback)?;
        Ok(())
    }
}
