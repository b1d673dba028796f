//! Resource Error Types
//!
//! Errors of the resource services, convertible into the unified
//! `kernel::error::AppError`.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::ApiClientError;
use thiserror::Error;

pub type ResourceResult<T> = Result<T, ResourceError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the booking API: {0}")]
    Transport(String),

    /// Input rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    #[error("Unexpected response from the booking API: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ResourceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::Api { status, .. } => ErrorKind::from_status(*status),
            ResourceError::Transport(_) => ErrorKind::ServiceUnavailable,
            ResourceError::Validation(_) => ErrorKind::BadRequest,
            ResourceError::Decode(_) | ResourceError::Config(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ResourceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<ApiClientError> for ResourceError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Status { status, message } => ResourceError::Api { status, message },
            ApiClientError::Transport(e) => ResourceError::Transport(e.to_string()),
            ApiClientError::Decode(msg) => ResourceError::Decode(msg),
            ApiClientError::Config(msg) => ResourceError::Config(msg),
        }
    }
}

impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        err.to_app_error()
    }
}
