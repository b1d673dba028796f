//! Key-value backed credential store
//!
//! Two entries: the raw credential and the JSON profile derived from it.

use std::io;

use platform::client::TokenSource;
use platform::storage::{KeyValueStore, StorageError};

use crate::application::config::AuthConfig;
use crate::domain::entity::{credential::StoredCredential, user_identity::UserIdentity};
use crate::domain::repository::CredentialStore;
use crate::error::AuthResult;

#[derive(Debug)]
pub struct KvCredentialStore<K: KeyValueStore> {
    kv: K,
    token_key: String,
    user_key: String,
}

impl<K: KeyValueStore> KvCredentialStore<K> {
    pub fn new(kv: K, config: &AuthConfig) -> Self {
        Self::with_keys(kv, &config.token_key, &config.user_key)
    }

    pub fn with_keys(kv: K, token_key: &str, user_key: &str) -> Self {
        Self {
            kv,
            token_key: token_key.to_string(),
            user_key: user_key.to_string(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read credential entry");
                None
            }
        }
    }
}

impl<K: KeyValueStore> CredentialStore for KvCredentialStore<K> {
    fn save(&self, credential: &str, identity: &UserIdentity) -> AuthResult<()> {
        let profile = serde_json::to_string(identity)
            .map_err(|e| StorageError::Io(io::Error::other(e)))?;

        let previous = self.read(&self.token_key);
        self.kv.set(&self.token_key, credential)?;

        // A token without its profile would still be sent as the bearer
        if let Err(e) = self.kv.set(&self.user_key, &profile) {
            let rollback = match previous {
                Some(token) => self.kv.set(&self.token_key, &token),
                None => self.kv.remove(&self.token_key),
            };
            if let Err(rollback) = rollback {
                tracing::error!(error = %rollback, "Failed to roll back credential entry");
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn load(&self) -> Option<StoredCredential> {
        let credential = self.read(&self.token_key)?;
        let profile = self.read(&self.user_key)?;

        if credential.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<UserIdentity>(&profile) {
            Ok(identity) => Some(StoredCredential { credential, identity }),
            Err(e) => {
                tracing::debug!(error = %e, "Stored profile is unreadable");
                None
            }
        }
    }

    fn clear(&self) -> AuthResult<()> {
        let token = self.kv.remove(&self.token_key);
        let user = self.kv.remove(&self.user_key);
        token?;
        user?;
        Ok(())
    }
}

impl<K: KeyValueStore> TokenSource for KvCredentialStore<K> {
    fn bearer_token(&self) -> Option<String> {
        self.read(&self.token_key)
            .filter(|token| !token.trim().is_empty())
    }
}
