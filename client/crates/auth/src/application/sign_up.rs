//! Sign Up Use Case
//!
//! Validates and submits a registration. Does not sign the user in.

use std::sync::Arc;

use crate::domain::entity::registration::RegistrationProfile;
use crate::domain::repository::AuthApi;
use crate::error::AuthResult;

/// Sign up use case
pub struct SignUpUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
}

impl<A> SignUpUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, profile: RegistrationProfile) -> AuthResult<()> {
        profile.validate()?;

        self.api.create_user(&profile).await?;

        tracing::info!(role = %profile.role, "Account registered");
        Ok(())
    }
}
