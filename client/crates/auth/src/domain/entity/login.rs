//! Login Entity
//!
//! Sign-in form input. The role hint is sent to the API verbatim; the
//! role that counts is the one carried by the issued credential.

use platform::password::{ClearTextPassword, PasswordPolicyError};
use serde::Serialize;

use crate::domain::value_object::{email::Email, role::Role};
use crate::error::{AuthError, AuthResult, FieldError};

/// Default role hint offered by the login form
pub const DEFAULT_ROLE_HINT: &str = "user";

/// Sign-in input
#[derive(Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: ClearTextPassword,
    #[serde(rename = "role")]
    pub role_hint: String,
}

impl LoginCredentials {
    pub fn new(
        email: impl Into<String>,
        password: ClearTextPassword,
        role_hint: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password,
            role_hint: role_hint.into(),
        }
    }

    /// Role named by the hint, if it is one the client knows
    pub fn hinted_role(&self) -> Option<Role> {
        Role::parse(&self.role_hint)
    }

    /// Form checks run before any request is sent
    pub fn validate(&self) -> AuthResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = Email::new(&self.email) {
            errors.push(e);
        }
        if let Err(e) = self.password.check_registration_policy() {
            errors.push(password_field_error(e));
        }
        if self.role_hint.trim().is_empty() {
            errors.push(FieldError::new("role", "Role is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

pub(crate) fn password_field_error(err: PasswordPolicyError) -> FieldError {
    FieldError::new("password", err.to_string())
}
