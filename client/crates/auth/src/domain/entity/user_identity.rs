//! User Identity Entity
//!
//! Profile derived from a decoded credential. Persisted next to the
//! credential so the UI can show who is signed in without decoding again.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::{role::Role, user_id::UserId};

/// Signed-in user as the client sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
}

impl UserIdentity {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Name for greetings, falling back to the email
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
