//! Sign Out Use Case

use std::sync::Arc;

use crate::domain::repository::CredentialStore;
use crate::error::AuthResult;

/// Sign out use case. Local only: the API keeps no session to end.
pub struct SignOutUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> AuthResult<()> {
        let user_id = self.store.load().map(|s| s.identity.id);
        self.store.clear()?;

        match user_id {
            Some(user_id) => tracing::info!(user_id = %user_id, "User signed out"),
            None => tracing::debug!("Sign out with no stored session"),
        }
        Ok(())
    }
}
