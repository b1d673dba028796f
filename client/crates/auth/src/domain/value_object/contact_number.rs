//! Contact Number Value Object

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Required number of digits
pub const CONTACT_NUMBER_DIGITS: usize = 10;

/// Ten-digit phone number, digits only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactNumber(String);

impl ContactNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self, FieldError> {
        let raw = raw.into().trim().to_string();
        if raw.is_empty() {
            return Err(FieldError::new("contactNumber", "Contact number is required"));
        }
        if raw.len() != CONTACT_NUMBER_DIGITS || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::new(
                "contactNumber",
                format!("Contact number must be {CONTACT_NUMBER_DIGITS} digits"),
            ));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_number() {
        assert!(ContactNumber::new("0123456789").is_ok());
        assert!(ContactNumber::new("").is_err());
        assert!(ContactNumber::new("12345").is_err());
        assert!(ContactNumber::new("01234567890").is_err());
        assert!(ContactNumber::new("012345678a").is_err());
    }
}
