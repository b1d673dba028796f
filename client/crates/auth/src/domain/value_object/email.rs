//! Email Value Object
//!
//! Format check only; whether the address exists is the API's concern.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FieldError;

/// Email address as typed by the user (trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(FieldError::new("email", "Email is required"));
        }
        if !Self::is_valid_format(&email) {
            return Err(FieldError::new("email", "Email is invalid"));
        }

        Ok(Self(email))
    }

    /// Some `x@y.z` with no whitespace anywhere. Further `@` or `.`
    /// characters are allowed, so `a@b.c@d` and `x@example.com.` pass.
    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        let Some(at) = email
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '@')
            .map(|(i, _)| i)
        else {
            return false;
        };
        email
            .char_indices()
            .rev()
            .skip(1)
            .find(|&(_, c)| c == '.')
            .is_some_and(|(dot, _)| dot > at + 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("guest@example.com").is_ok());
        assert!(Email::new("  guest@example.com ").is_ok());
        assert!(Email::new("first.last+tag@hotel.co.uk").is_ok());
        assert!(Email::new("a@b.c@d").is_ok());
        assert!(Email::new("x@example.com.").is_ok());
        assert!(Email::new("@a@b.c").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("guestexample.com").is_err());
        assert!(Email::new("guest@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("guest@example").is_err());
        assert!(Email::new("guest @example.com").is_err());
        assert!(Email::new("guest@.com").is_err());
        assert!(Email::new("guest@example.").is_err());
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(Email::new("").unwrap_err().message, "Email is required");
        assert_eq!(Email::new("nope").unwrap_err().message, "Email is invalid");
    }

    #[test]
    fn test_email_domain() {
        let email = Email::new("guest@example.com").unwrap();
        assert_eq!(email.domain(), "example.com");
        assert_eq!(email.as_str(), "guest@example.com");
    }
}
