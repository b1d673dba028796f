//! Session Decoder
//!
//! Reads identity and expiry out of a credential without contacting the
//! network. The signature is never checked: decoded claims drive routing
//! and display only, and the API re-verifies the credential on every call.

use chrono::Utc;
use platform::jwt::{Claims, decode_claims};
use serde_json::Value;

use crate::domain::entity::credential::DecodedCredential;
use crate::domain::entity::user_identity::UserIdentity;
use crate::domain::value_object::{role::Role, user_id::UserId};
use crate::error::MalformedCredential;

const WS_CLAIMS: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims";
const MS_ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Claim names to look up, in order of preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimNames {
    pub id: Vec<String>,
    pub name: Vec<String>,
    pub email: Vec<String>,
    pub role: Vec<String>,
    pub expiry: Vec<String>,
}

impl Default for ClaimNames {
    /// Short claim names first, then the long URIs .NET issuers emit
    fn default() -> Self {
        Self {
            id: vec![
                "nameid".into(),
                format!("{WS_CLAIMS}/nameidentifier"),
                "sub".into(),
            ],
            name: vec!["name".into(), format!("{WS_CLAIMS}/name"), "unique_name".into()],
            email: vec!["email".into(), format!("{WS_CLAIMS}/emailaddress")],
            role: vec!["role".into(), MS_ROLE_CLAIM.into()],
            expiry: vec!["exp".into()],
        }
    }
}

impl ClaimNames {
    /// Exactly one name per claim, no fallbacks
    pub fn new(id: &str, name: &str, email: &str, role: &str, expiry: &str) -> Self {
        Self {
            id: vec![id.into()],
            name: vec![name.into()],
            email: vec![email.into()],
            role: vec![role.into()],
            expiry: vec![expiry.into()],
        }
    }
}

fn lookup<'a>(claims: &'a Claims, names: &[String]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| claims.get(name).filter(|v| !v.is_null()))
}

fn string_claim(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Decodes credentials into identity and expiry
#[derive(Debug, Clone, Default)]
pub struct SessionDecoder {
    claims: ClaimNames,
}

impl SessionDecoder {
    pub fn new(claims: ClaimNames) -> Self {
        Self { claims }
    }

    pub fn claim_names(&self) -> &ClaimNames {
        &self.claims
    }

    pub fn decode(&self, credential: &str) -> Result<DecodedCredential, MalformedCredential> {
        let claims = decode_claims(credential)?;

        let id = lookup(&claims, &self.claims.id)
            .ok_or(MalformedCredential::MissingClaim("id"))
            .and_then(|v| string_claim(v).ok_or(MalformedCredential::InvalidClaim { claim: "id" }))?;
        if id.trim().is_empty() {
            return Err(MalformedCredential::InvalidClaim { claim: "id" });
        }

        let role = self.decode_role(&claims)?;

        let name = lookup(&claims, &self.claims.name)
            .and_then(string_claim)
            .unwrap_or_default();
        let email = lookup(&claims, &self.claims.email)
            .and_then(string_claim)
            .unwrap_or_default();

        let expires_at = match lookup(&claims, &self.claims.expiry) {
            None => None,
            Some(value) => Some(expiry_seconds(value)?),
        };

        Ok(DecodedCredential {
            identity: UserIdentity::new(UserId::new(id), name, email, role),
            expires_at,
        })
    }

    /// Role claim as a string, or the first recognised entry of an array
    fn decode_role(&self, claims: &Claims) -> Result<Role, MalformedCredential> {
        let value = lookup(claims, &self.claims.role).ok_or(MalformedCredential::MissingClaim("role"))?;
        match value {
            Value::String(code) => {
                Role::parse(code).ok_or_else(|| MalformedCredential::UnknownRole(code.clone()))
            }
            Value::Array(codes) => codes
                .iter()
                .filter_map(Value::as_str)
                .find_map(Role::parse)
                .ok_or_else(|| MalformedCredential::UnknownRole(value.to_string())),
            _ => Err(MalformedCredential::InvalidClaim { claim: "role" }),
        }
    }

    /// True when the credential cannot be decoded, has no expiry, or has
    /// expired at `now` (seconds since the epoch)
    pub fn is_expired_at(&self, credential: &str, now: i64) -> bool {
        match self.decode(credential) {
            Ok(decoded) => decoded.is_expired_at(now),
            Err(e) => {
                tracing::debug!(error = %e, "Credential failed to decode");
                true
            }
        }
    }

    pub fn is_expired(&self, credential: &str) -> bool {
        self.is_expired_at(credential, Utc::now().timestamp())
    }
}

fn expiry_seconds(value: &Value) -> Result<i64, MalformedCredential> {
    let invalid = || MalformedCredential::InvalidClaim { claim: "exp" };
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64))
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
