//! Repository Traits
//!
//! Ports to credential persistence and the remote auth endpoints.
//! Implementations live in the infrastructure layer.

use crate::domain::entity::{
    credential::StoredCredential, login::LoginCredentials, registration::RegistrationProfile,
    user_identity::UserIdentity,
};
use crate::error::AuthResult;

/// Durable holder of the credential and its derived profile.
///
/// Operations are synchronous and immediately visible to the next call.
pub trait CredentialStore: Send + Sync {
    /// Overwrite both entries
    fn save(&self, credential: &str, identity: &UserIdentity) -> AuthResult<()>;

    /// Both entries, or `None` when either is absent or unreadable
    fn load(&self) -> Option<StoredCredential>;

    /// Remove both entries; a no-op when already empty
    fn clear(&self) -> AuthResult<()>;
}

/// Remote authentication endpoints
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// Exchange credentials for a signed token
    async fn request_token(&self, login: &LoginCredentials) -> AuthResult<String>;

    /// Create an account; does not sign in
    async fn create_user(&self, profile: &RegistrationProfile) -> AuthResult<()>;
}
