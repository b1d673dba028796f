//! Infrastructure Layer
//!
//! Credential persistence and the HTTP binding of the auth endpoints.

pub mod credential_store;
pub mod http;

pub use credential_store::KvCredentialStore;
pub use http::HttpAuthApi;
