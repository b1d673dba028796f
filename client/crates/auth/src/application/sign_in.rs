//! Sign In Use Case
//!
//! Exchanges credentials for a token, decodes it and persists the session.

use std::sync::Arc;

use crate::domain::entity::{login::LoginCredentials, user_identity::UserIdentity};
use crate::domain::repository::{AuthApi, CredentialStore};
use crate::domain::services::SessionDecoder;
use crate::error::AuthResult;

/// Sign in use case
pub struct SignInUseCase<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    api: Arc<A>,
    store: Arc<S>,
    decoder: Arc<SessionDecoder>,
}

impl<A, S> SignInUseCase<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    pub fn new(api: Arc<A>, store: Arc<S>, decoder: Arc<SessionDecoder>) -> Self {
        Self { api, store, decoder }
    }

    /// Nothing is persisted unless the issued token decodes
    pub async fn execute(&self, login: LoginCredentials) -> AuthResult<UserIdentity> {
        login.validate()?;

        let token = self.api.request_token(&login).await?;
        let decoded = self.decoder.decode(&token)?;
        if decoded.expires_at.is_none() {
            tracing::warn!(user_id = %decoded.identity.id, "Issued credential carries no expiry");
        }

        let identity = decoded.into_identity();
        self.store.save(&token, &identity)?;

        tracing::info!(
            user_id = %identity.id,
            role = %identity.role,
            "User signed in"
        );

        Ok(identity)
    }
}
