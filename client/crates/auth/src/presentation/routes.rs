//! Route Table
//!
//! Maps client paths to views and their access rules.

use derive_more::Display;

use crate::domain::value_object::role::Role;
use crate::presentation::route_guard::RouteAccessRequest;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum View {
    #[display("/")]
    Home,
    #[display("/login")]
    Login,
    #[display("/register")]
    Register,
    #[display("/profile")]
    Profile,
    #[display("/guest")]
    GuestHome,
    #[display("/manager")]
    ManagerHome,
    #[display("/admin")]
    AdminHome,
    #[display("/hotels/{_0}")]
    HotelDetail(String),
}

impl View {
    /// Landing view after sign-in, and the redirect target when a role
    /// lacks access
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => View::AdminHome,
            Role::Manager => View::ManagerHome,
            Role::Guest => View::GuestHome,
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Restricted(RouteAccessRequest),
}

/// Resolve a path to its view and access rule. `None` for unknown paths,
/// which callers send to [`View::Home`].
pub fn resolve(path: &str) -> Option<(View, RouteAccess)> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

    let route = match segments.as_slice() {
        [] => (View::Home, RouteAccess::Public),
        ["login"] => (View::Login, RouteAccess::Public),
        ["register"] => (View::Register, RouteAccess::Public),
        ["hotels", id] => (View::HotelDetail((*id).to_string()), RouteAccess::Public),
        ["profile"] => (
            View::Profile,
            RouteAccess::Restricted(RouteAccessRequest::any_authenticated()),
        ),
        ["guest"] => (
            View::GuestHome,
            RouteAccess::Restricted(RouteAccessRequest::roles([Role::Guest])),
        ),
        ["manager"] => (
            View::ManagerHome,
            RouteAccess::Restricted(RouteAccessRequest::roles([Role::Manager])),
        ),
        ["admin"] => (
            View::AdminHome,
            RouteAccess::Restricted(RouteAccessRequest::roles([Role::Admin])),
        ),
        _ => return None,
    };
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_paths() {
        assert_eq!(View::Home.path(), "/");
        assert_eq!(View::AdminHome.to_string(), "/admin");
        assert_eq!(View::HotelDetail("12".into()).to_string(), "/hotels/12");
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(View::home_for(Role::Admin), View::AdminHome);
        assert_eq!(View::home_for(Role::Manager), View::ManagerHome);
        assert_eq!(View::home_for(Role::Guest), View::GuestHome);
    }

    #[test]
    fn test_resolve_public_routes() {
        assert_eq!(resolve("/"), Some((View::Home, RouteAccess::Public)));
        assert_eq!(resolve(""), Some((View::Home, RouteAccess::Public)));
        assert_eq!(resolve("/login"), Some((View::Login, RouteAccess::Public)));
        assert_eq!(resolve("/register/"), Some((View::Register, RouteAccess::Public)));
        assert_eq!(
            resolve("/hotels/3?tab=rooms"),
            Some((View::HotelDetail("3".into()), RouteAccess::Public))
        );
    }

    #[test]
    fn test_resolve_restricted_routes() {
        assert_eq!(
            resolve("/profile"),
            Some((
                View::Profile,
                RouteAccess::Restricted(RouteAccessRequest::any_authenticated())
            ))
        );
        assert_eq!(
            resolve("/admin"),
            Some((
                View::AdminHome,
                RouteAccess::Restricted(RouteAccessRequest::roles([Role::Admin]))
            ))
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("/hotels"), None);
        assert_eq!(resolve("/hotels/1/rooms"), None);
        assert_eq!(resolve("/settings"), None);
    }
}
