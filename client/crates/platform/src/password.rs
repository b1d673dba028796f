//! Clear-text password handling
//!
//! Passwords only pass through the client on their way to the API, but they
//! still should not linger in memory or leak into logs:
//! - [`ClearTextPassword`] zeroizes its buffer on drop
//! - `Debug` output is redacted
//! - Serialization writes the raw value (request bodies only)
//!
//! The registration policy mirrors what the booking API enforces so the user
//! gets feedback before a round trip.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration password policy violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password is required")]
    Empty,

    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Password must contain both letters and numbers")]
    MissingLetterOrDigit,

    #[error("Password may only contain letters and numbers")]
    InvalidCharacter,
}

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone` to avoid accidental copies.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password without applying any policy (login path)
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Check the registration policy: at least [`MIN_PASSWORD_LENGTH`]
    /// ASCII letters and digits, with at least one of each.
    pub fn check_registration_policy(&self) -> Result<(), PasswordPolicyError> {
        if self.0.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        if self.0.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        if !self.0.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }
        let has_letter = self.0.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = self.0.chars().any(|c| c.is_ascii_digit());
        if !(has_letter && has_digit) {
            return Err(PasswordPolicyError::MissingLetterOrDigit);
        }
        Ok(())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl Serialize for ClearTextPassword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_letters_and_digits() {
        assert!(ClearTextPassword::new("hotel2024").check_registration_policy().is_ok());
        assert!(ClearTextPassword::new("A1b2C3d4").check_registration_policy().is_ok());
    }

    #[test]
    fn test_policy_rejections() {
        assert_eq!(
            ClearTextPassword::new("").check_registration_policy(),
            Err(PasswordPolicyError::Empty)
        );
        assert_eq!(
            ClearTextPassword::new("ab12").check_registration_policy(),
            Err(PasswordPolicyError::TooShort { min: 8 })
        );
        assert_eq!(
            ClearTextPassword::new("abcdefgh").check_registration_policy(),
            Err(PasswordPolicyError::MissingLetterOrDigit)
        );
        assert_eq!(
            ClearTextPassword::new("12345678").check_registration_policy(),
            Err(PasswordPolicyError::MissingLetterOrDigit)
        );
        assert_eq!(
            ClearTextPassword::new("hotel 2024").check_registration_policy(),
            Err(PasswordPolicyError::InvalidCharacter)
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("secret123");
        let debug = format!("{password:?}");
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_serializes_raw_value() {
        let password = ClearTextPassword::new("secret123");
        assert_eq!(serde_json::to_string(&password).unwrap(), "\"secret123\"");
    }
}
