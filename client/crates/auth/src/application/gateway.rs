//! Auth Gateway
//!
//! Single entry point composing the auth use cases over one API port, one
//! credential store and one decoder.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{
    check_session::CheckSessionUseCase, sign_in::SignInUseCase, sign_out::SignOutUseCase,
    sign_up::SignUpUseCase,
};
use crate::domain::entity::{
    login::LoginCredentials, registration::RegistrationProfile, user_identity::UserIdentity,
};
use crate::domain::repository::{AuthApi, CredentialStore};
use crate::domain::services::SessionDecoder;
use crate::error::AuthResult;

pub struct AuthGateway<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    sign_in: SignInUseCase<A, S>,
    sign_up: SignUpUseCase<A>,
    sign_out: SignOutUseCase<S>,
    check_session: CheckSessionUseCase<S>,
    decoder: Arc<SessionDecoder>,
    config: Arc<AuthConfig>,
}

impl<A, S> AuthGateway<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    pub fn new(api: Arc<A>, store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        let decoder = Arc::new(SessionDecoder::new(config.claims.clone()));
        Self {
            sign_in: SignInUseCase::new(api.clone(), store.clone(), decoder.clone()),
            sign_up: SignUpUseCase::new(api),
            sign_out: SignOutUseCase::new(store.clone()),
            check_session: CheckSessionUseCase::new(store, decoder.clone()),
            decoder,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn decoder(&self) -> &SessionDecoder {
        &self.decoder
    }

    pub async fn login(
        &self,
        email: &str,
        password: ClearTextPassword,
        role_hint: &str,
    ) -> AuthResult<UserIdentity> {
        self.sign_in
            .execute(LoginCredentials::new(email, password, role_hint))
            .await
            .inspect_err(|e| e.log())
    }

    pub async fn register(&self, profile: RegistrationProfile) -> AuthResult<()> {
        self.sign_up.execute(profile).await.inspect_err(|e| e.log())
    }

    pub fn logout(&self) -> AuthResult<()> {
        self.sign_out.execute().inspect_err(|e| e.log())
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.check_session.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.check_session.is_authenticated()
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.check_session.is_authenticated_at(now)
    }

    pub fn restore(&self) -> Option<UserIdentity> {
        self.check_session.restore()
    }

    pub fn restore_at(&self, now: i64) -> Option<UserIdentity> {
        self.check_session.restore_at(now)
    }
}
