//! Route Guard
//!
//! Decides whether a navigation may proceed for the current session.

use std::collections::HashSet;

use crate::domain::entity::session_state::SessionState;
use crate::domain::value_object::role::{Role, has_access};
use crate::presentation::routes::View;

/// Roles a view demands. `None` (or an empty set) admits any signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteAccessRequest {
    pub required_roles: Option<HashSet<Role>>,
}

impl RouteAccessRequest {
    pub fn any_authenticated() -> Self {
        Self::default()
    }

    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            required_roles: Some(roles.into_iter().collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(View),
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }
}

pub struct RouteGuard;

impl RouteGuard {
    pub fn evaluate(request: &RouteAccessRequest, state: &SessionState) -> RouteDecision {
        let Some(user) = &state.current_user else {
            return RouteDecision::Redirect(View::Login);
        };

        if has_access(user.role, request.required_roles.as_ref()) {
            RouteDecision::Allow
        } else {
            RouteDecision::Redirect(View::home_for(user.role))
        }
    }
}
