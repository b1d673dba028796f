//! Credential Entities

use crate::domain::entity::user_identity::UserIdentity;

/// Result of decoding a credential locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCredential {
    pub identity: UserIdentity,
    /// `exp` claim in seconds since the epoch
    pub expires_at: Option<i64>,
}

impl DecodedCredential {
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn into_identity(self) -> UserIdentity {
        self.identity
    }

    /// Expired at `now` (seconds). A credential without `exp` never counts
    /// as valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        match self.expires_at {
            Some(exp) => exp <= now,
            None => true,
        }
    }
}

/// Credential and profile as held by the credential store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub credential: String,
    pub identity: UserIdentity,
}
