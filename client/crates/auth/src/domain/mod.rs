//! Domain Layer
//!
//! Contains entities, value objects, the session decoder and port traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    credential::{DecodedCredential, StoredCredential},
    session_state::SessionState,
    user_identity::UserIdentity,
};
pub use repository::{AuthApi, CredentialStore};
pub use services::{ClaimNames, SessionDecoder};
pub use value_object::role::Role;
