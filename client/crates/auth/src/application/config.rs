//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::services::ClaimNames;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Booking API root, e.g. `https://host/api`
    pub api_base_url: String,
    /// Storage key of the credential
    pub token_key: String,
    /// Storage key of the derived profile
    pub user_key: String,
    /// Where the decoder finds each claim
    pub claims: ClaimNames,
    /// Per-request timeout; `None` waits on the API's own limits
    pub request_timeout: Option<Duration>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://localhost:7001/api".to_string(),
            token_key: "token".to_string(),
            user_key: "user".to_string(),
            claims: ClaimNames::default(),
            request_timeout: None,
        }
    }
}

impl AuthConfig {
    /// Create config for development (plain HTTP API on localhost)
    pub fn development() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            request_timeout: Some(Duration::from_secs(30)),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_keys() {
        let config = AuthConfig::default();
        assert_eq!(config.token_key, "token");
        assert_eq!(config.user_key, "user");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_builders() {
        let config = AuthConfig::development()
            .with_base_url("http://api.test/api")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base_url, "http://api.test/api");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
