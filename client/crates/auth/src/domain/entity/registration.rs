//! Registration Entity

use platform::password::ClearTextPassword;
use serde::Serialize;

use crate::domain::entity::login::password_field_error;
use crate::domain::value_object::{contact_number::ContactNumber, email::Email, role::Role};
use crate::error::{AuthError, AuthResult, FieldError};

/// New account details, serialized as the `POST /User` body.
///
/// The confirmation never leaves the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationProfile {
    pub name: String,
    pub email: String,
    pub password: ClearTextPassword,
    #[serde(skip)]
    pub confirm_password: Option<ClearTextPassword>,
    pub contact_number: String,
    pub role: String,
}

impl RegistrationProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: ClearTextPassword,
        contact_number: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            password,
            confirm_password: None,
            contact_number: contact_number.into().trim().to_string(),
            role: role.into().trim().to_string(),
        }
    }

    /// Require the password to be typed twice
    pub fn with_confirmation(mut self, confirm: ClearTextPassword) -> Self {
        self.confirm_password = Some(confirm);
        self
    }

    pub fn requested_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Run every form check and report all failures at once
    pub fn validate(&self) -> AuthResult<()> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }
        if let Err(e) = Email::new(&self.email) {
            errors.push(e);
        }
        if let Err(e) = self.password.check_registration_policy() {
            errors.push(password_field_error(e));
        }
        if let Some(confirm) = &self.confirm_password {
            if confirm.is_empty() {
                errors.push(FieldError::new("confirmPassword", "Please confirm your password"));
            } else if confirm.expose() != self.password.expose() {
                errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
            }
        }
        if let Err(e) = ContactNumber::new(&self.contact_number) {
            errors.push(e);
        }
        if self.role.is_empty() {
            errors.push(FieldError::new("role", "Role is required"));
        } else if self.requested_role().is_none() {
            errors.push(FieldError::new("role", format!("Unknown role: {}", self.role)));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}
