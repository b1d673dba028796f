//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use std::fmt;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::ApiClientError;
use platform::jwt::TokenFormatError;
use platform::storage::StorageError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message used when the API rejects a login without saying why
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// Message used when the API rejects a registration without saying why
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Message used when a login succeeds but carries no token
pub const NO_TOKEN_RECEIVED: &str = "No token received";

/// A credential that cannot be read as a signed token with the expected claims.
///
/// Never shown to the user as such: callers collapse it into
/// "not authenticated".
#[derive(Debug, Error)]
pub enum MalformedCredential {
    #[error(transparent)]
    Format(#[from] TokenFormatError),

    #[error("Missing claim: {0}")]
    MissingClaim(&'static str),

    #[error("Claim {claim} has an unusable value")]
    InvalidClaim { claim: &'static str },

    #[error("Unknown role in credential: {0:?}")]
    UnknownRole(String),
}

/// Validation failure for a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API answered with a non-success status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The API could not be reached
    #[error("Could not reach the booking API: {0}")]
    Transport(String),

    /// The API answered with a body the client does not understand
    #[error("Unexpected response from the booking API: {0}")]
    UnexpectedResponse(String),

    /// Login succeeded but no token came back
    #[error("{0}")]
    MissingToken(String),

    /// The issued token could not be decoded
    #[error("Received an unreadable credential: {0}")]
    MalformedCredential(#[from] MalformedCredential),

    /// Input rejected before any request was sent
    #[error("{}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Credential persistence failed
    #[error("Credential storage failed: {0}")]
    Storage(#[from] StorageError),

    /// Client misconfiguration
    #[error("Invalid auth configuration: {0}")]
    Config(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Rejected { status, .. } => ErrorKind::from_status(*status),
            AuthError::Transport(_) => ErrorKind::ServiceUnavailable,
            AuthError::UnexpectedResponse(_) | AuthError::MissingToken(_) => {
                ErrorKind::InternalServerError
            }
            AuthError::MalformedCredential(_) => ErrorKind::Unauthorized,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Storage(_) | AuthError::Config(_) => ErrorKind::InternalServerError,
        }
    }

    /// Text suitable for the session's `error` field
    pub fn user_message(&self) -> String {
        match self {
            AuthError::MalformedCredential(_) => AUTHENTICATION_FAILED.to_string(),
            other => other.to_string(),
        }
    }

    /// Field errors when this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AuthError::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.user_message())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Rejected { status, message } => {
                tracing::warn!(status, message = %message, "Auth request rejected");
            }
            AuthError::Transport(msg) => {
                tracing::warn!(error = %msg, "Auth request failed in transport");
            }
            AuthError::MalformedCredential(e) => {
                tracing::warn!(error = %e, "API issued a malformed credential");
            }
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Credential storage error");
            }
            AuthError::Config(msg) => {
                tracing::error!(message = %msg, "Auth configuration error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<ApiClientError> for AuthError {
    fn from(err: ApiClientError) -> Self {
        match err {
            ApiClientError::Status { status, message } => AuthError::Rejected { status, message },
            ApiClientError::Transport(e) => AuthError::Transport(e.to_string()),
            ApiClientError::Decode(msg) => AuthError::UnexpectedResponse(msg),
            ApiClientError::Config(msg) => AuthError::Config(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
