//! Session State Entity
//!
//! Snapshot of the session as observed by views.

use std::collections::HashSet;

use crate::domain::entity::user_identity::UserIdentity;
use crate::domain::value_object::role::{Role, has_access};

/// Current user plus in-flight and error flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_user: Option<UserIdentity>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    /// Uninitialized: loading until the store has been read
    fn default() -> Self {
        Self {
            current_user: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self {
            current_user: None,
            loading: false,
            error: None,
        }
    }

    pub fn authenticated(user: UserIdentity) -> Self {
        Self {
            current_user: Some(user),
            loading: false,
            error: None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    /// Role check against a required set; false when anonymous
    pub fn has_access(&self, required: Option<&HashSet<Role>>) -> bool {
        self.role().is_some_and(|role| has_access(role, required))
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;

    fn manager() -> SessionState {
        SessionState::authenticated(UserIdentity::new(
            UserId::new("5"),
            "Mia",
            "mia@example.com",
            Role::Manager,
        ))
    }

    #[test]
    fn test_uninitialized_is_loading() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_role_helpers() {
        let state = manager();
        assert!(state.is_manager());
        assert!(!state.is_admin());
        assert!(!state.is_guest());

        let anon = SessionState::anonymous();
        assert!(!anon.is_manager() && !anon.is_admin() && !anon.is_guest());
        assert_eq!(anon.role(), None);
    }

    #[test]
    fn test_has_access_requires_user() {
        let staff: HashSet<Role> = [Role::Manager, Role::Admin].into_iter().collect();
        assert!(manager().has_access(Some(&staff)));
        assert!(manager().has_access(None));
        assert!(!SessionState::anonymous().has_access(None));
    }
}
