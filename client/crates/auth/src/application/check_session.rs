//! Check Session Use Case
//!
//! Answers "who is signed in" from the store, and restores a session at
//! startup by discarding credentials that no longer hold.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::user_identity::UserIdentity;
use crate::domain::repository::CredentialStore;
use crate::domain::services::SessionDecoder;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    decoder: Arc<SessionDecoder>,
}

impl<S> CheckSessionUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, decoder: Arc<SessionDecoder>) -> Self {
        Self { store, decoder }
    }

    /// Stored profile, without any expiry check
    pub fn current_user(&self) -> Option<UserIdentity> {
        self.store.load().map(|stored| stored.identity)
    }

    /// A credential is stored and has not expired at `now`
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        self.store
            .load()
            .is_some_and(|stored| !self.decoder.is_expired_at(&stored.credential, now))
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now().timestamp())
    }

    /// Stored profile when its credential is still valid at `now`.
    ///
    /// Anything else (missing, partial, malformed or expired entries) is
    /// cleared from the store.
    pub fn restore_at(&self, now: i64) -> Option<UserIdentity> {
        let Some(stored) = self.store.load() else {
            self.discard("no complete credential stored");
            return None;
        };

        if self.decoder.is_expired_at(&stored.credential, now) {
            tracing::warn!(user_id = %stored.identity.id, "Stored credential expired or unreadable");
            self.discard("stale credential");
            return None;
        }

        tracing::debug!(user_id = %stored.identity.id, "Session restored");
        Some(stored.identity)
    }

    pub fn restore(&self) -> Option<UserIdentity> {
        self.restore_at(Utc::now().timestamp())
    }

    fn discard(&self, reason: &str) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, reason, "Failed to clear credential store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::domain::value_object::{role::Role, user_id::UserId};
    use crate::infra::credential_store::KvCredentialStore;
    use platform::jwt::encode_unsigned;
    use platform::storage::{KeyValueStore, MemoryKeyValueStore};
    use serde_json::json;

    type Store = KvCredentialStore<Arc<MemoryKeyValueStore>>;

    fn admin() -> UserIdentity {
        UserIdentity::new(UserId::new("3"), "Ada", "ada@example.com", Role::Admin)
    }

    fn setup() -> (Arc<MemoryKeyValueStore>, Arc<Store>, CheckSessionUseCase<Store>) {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let store = Arc::new(KvCredentialStore::new(kv.clone(), &AuthConfig::default()));
        let check = CheckSessionUseCase::new(store.clone(), Arc::new(SessionDecoder::default()));
        (kv, store, check)
    }

    fn credential(exp: i64) -> String {
        encode_unsigned(&json!({ "nameid": "3", "role": "admin", "exp": exp }))
    }

    #[test]
    fn test_malformed_credential_is_not_authenticated() {
        let (kv, store, check) = setup();
        store.save("not-a-token", &admin()).unwrap();

        assert!(!check.is_authenticated());
        assert!(!check.is_authenticated_at(0));

        assert_eq!(check.restore(), None);
        assert_eq!(kv.get("token").unwrap(), None);
        assert_eq!(kv.get("user").unwrap(), None);
    }

    #[test]
    fn test_current_user_skips_expiry_check() {
        let (_, store, check) = setup();
        store.save("not-a-token", &admin()).unwrap();
        assert_eq!(check.current_user().map(|u| u.role), Some(Role::Admin));

        store.save(&credential(100), &admin()).unwrap();
        assert!(!check.is_authenticated_at(200));
        assert_eq!(check.current_user(), Some(admin()));
    }

    #[test]
    fn test_expiry_boundary() {
        let (_, store, check) = setup();
        store.save(&credential(1_000), &admin()).unwrap();

        assert!(check.is_authenticated_at(999));
        assert!(!check.is_authenticated_at(1_000));
        assert_eq!(check.restore_at(999), Some(admin()));
        assert_eq!(check.restore_at(1_000), None);
        assert_eq!(check.current_user(), None);
    }

    #[test]
    fn test_token_without_profile_is_not_authenticated() {
        let (kv, _, check) = setup();
        kv.set("token", &credential(1_000)).unwrap();

        assert!(!check.is_authenticated_at(0));
        assert_eq!(check.current_user(), None);
    }
}
