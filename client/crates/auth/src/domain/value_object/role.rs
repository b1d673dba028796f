use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// UI-level role carried by the credential.
///
/// Closed set. The login form's `"user"` option is the same role as
/// `Guest`, so both codes parse to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Guest,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Guest, Role::Manager, Role::Admin];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Case-insensitive parse; `None` for codes outside the closed set
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "guest" | "user" => Some(Role::Guest),
            "manager" => Some(Role::Manager),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Pure access check shared by the route guard and the session context.
///
/// `None` or an empty set means any authenticated role is accepted.
pub fn has_access(role: Role, required: Option<&HashSet<Role>>) -> bool {
    match required {
        None => true,
        Some(roles) if roles.is_empty() => true,
        Some(roles) => roles.contains(&role),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Role::parse(&code).ok_or_else(|| serde::de::Error::custom(UnknownRole(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("guest"), Some(Role::Guest));
        assert_eq!(Role::parse("user"), Some(Role::Guest));
        assert_eq!(Role::parse("Manager"), Some(Role::Manager));
        assert_eq!(Role::parse(" ADMIN "), Some(Role::Admin));
        assert_eq!(Role::parse("superuser"), None);
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Guest.to_string(), "guest");
        assert_eq!(Role::Manager.to_string(), "manager");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        assert_eq!(serde_json::from_str::<Role>("\"User\"").unwrap(), Role::Guest);
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }

    #[test]
    fn test_has_access() {
        let admin_only: HashSet<Role> = [Role::Admin].into_iter().collect();
        let staff: HashSet<Role> = [Role::Admin, Role::Manager].into_iter().collect();
        let empty = HashSet::new();

        assert!(has_access(Role::Guest, None));
        assert!(has_access(Role::Guest, Some(&empty)));
        assert!(has_access(Role::Admin, Some(&admin_only)));
        assert!(!has_access(Role::Manager, Some(&admin_only)));
        assert!(has_access(Role::Manager, Some(&staff)));
        assert!(!has_access(Role::Guest, Some(&staff)));
    }
}
