//! Session Context
//!
//! Process-wide session state owned by the application root and shared by
//! reference. Observers read snapshots or subscribe to changes; only the
//! context mutates.
//!
//! ```text
//! Uninitialized --hydrate--> Authenticated | Anonymous
//! Anonymous --login ok--> Authenticated
//! Authenticated --logout--> Anonymous
//! ```

use std::collections::HashSet;

use chrono::Utc;
use platform::password::ClearTextPassword;
use tokio::sync::watch;

use crate::application::gateway::AuthGateway;
use crate::domain::entity::{
    registration::RegistrationProfile, session_state::SessionState, user_identity::UserIdentity,
};
use crate::domain::repository::{AuthApi, CredentialStore};
use crate::domain::value_object::role::Role;
use crate::error::AuthResult;
use crate::presentation::route_guard::{RouteAccessRequest, RouteDecision, RouteGuard};
use crate::presentation::routes::{RouteAccess, View, resolve};

pub struct SessionContext<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    gateway: AuthGateway<A, S>,
    state: watch::Sender<SessionState>,
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: CredentialStore,
{
    /// Uninitialized context; call [`hydrate`](Self::hydrate) before use
    pub fn new(gateway: AuthGateway<A, S>) -> Self {
        Self {
            gateway,
            state: watch::Sender::new(SessionState::default()),
        }
    }

    /// Construct and hydrate from the credential store
    pub fn initialize(gateway: AuthGateway<A, S>) -> Self {
        let context = Self::new(gateway);
        context.hydrate();
        context
    }

    pub fn gateway(&self) -> &AuthGateway<A, S> {
        &self.gateway
    }

    pub fn hydrate(&self) {
        self.hydrate_at(Utc::now().timestamp());
    }

    /// Read the stored session, discarding it unless its credential is
    /// still valid at `now`
    pub fn hydrate_at(&self, now: i64) {
        let user = self.gateway.restore_at(now);
        match &user {
            Some(user) => tracing::info!(user_id = %user.id, role = %user.role, "Session hydrated"),
            None => tracing::debug!("Session hydrated as anonymous"),
        }
        self.state.send_modify(|state| {
            state.current_user = user;
            state.loading = false;
        });
    }

    fn begin(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// On failure the current user is left as it was and `error` carries
    /// the reason
    pub async fn login(
        &self,
        email: &str,
        password: ClearTextPassword,
        role_hint: &str,
    ) -> AuthResult<UserIdentity> {
        self.begin();
        let result = self.gateway.login(email, password, role_hint).await;

        self.state.send_modify(|state| {
            match &result {
                Ok(user) => state.current_user = Some(user.clone()),
                Err(e) => state.error = Some(e.user_message()),
            }
            state.loading = false;
        });
        result
    }

    /// Never changes the current user
    pub async fn register(&self, profile: RegistrationProfile) -> AuthResult<()> {
        self.begin();
        let result = self.gateway.register(profile).await;

        self.state.send_modify(|state| {
            if let Err(e) = &result {
                state.error = Some(e.user_message());
            }
            state.loading = false;
        });
        result
    }

    /// Always ends Anonymous; a storage failure is still reported
    pub fn logout(&self) -> AuthResult<()> {
        let result = self.gateway.logout();
        self.state.send_modify(|state| {
            state.current_user = None;
            state.loading = false;
            state.error = result.as_ref().err().map(|e| e.user_message());
        });
        result
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state.borrow().current_user.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().has_role(role)
    }

    pub fn has_access(&self, required: Option<&HashSet<Role>>) -> bool {
        self.state.borrow().has_access(required)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_manager(&self) -> bool {
        self.has_role(Role::Manager)
    }

    pub fn is_guest(&self) -> bool {
        self.has_role(Role::Guest)
    }

    /// Stored credential present and unexpired
    pub fn is_authenticated(&self) -> bool {
        self.gateway.is_authenticated()
    }

    pub fn authorize(&self, request: &RouteAccessRequest) -> RouteDecision {
        self.authorize_at(request, Utc::now().timestamp())
    }

    /// Guard a navigation, first dropping a session whose stored credential
    /// has expired since it was loaded
    pub fn authorize_at(&self, request: &RouteAccessRequest, now: i64) -> RouteDecision {
        let signed_in = self.state.borrow().is_authenticated();
        if signed_in && !self.gateway.is_authenticated_at(now) {
            tracing::warn!("Session credential no longer valid, signing out");
            if let Err(e) = self.gateway.logout() {
                tracing::error!(error = %e, "Failed to clear expired session");
            }
            self.state.send_modify(|state| {
                state.current_user = None;
                state.loading = false;
            });
        }

        RouteGuard::evaluate(request, &self.state.borrow())
    }

    /// Resolve a path and guard it. Unknown paths go home.
    pub fn navigate(&self, path: &str) -> RouteDecision {
        match resolve(path) {
            None => RouteDecision::Redirect(View::Home),
            Some((_, RouteAccess::Public)) => RouteDecision::Allow,
            Some((_, RouteAccess::Restricted(request))) => self.authorize(&request),
        }
    }
}
