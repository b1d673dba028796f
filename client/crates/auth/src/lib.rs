//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, session decoder, port traits
//! - `application/` - Use cases, gateway and the session context
//! - `infra/` - Credential store and HTTP bindings
//! - `presentation/` - Route table and route guard
//!
//! ## Features
//! - Sign-in against `POST /Token`, registration against `POST /User`
//! - Local credential decoding (identity, role, expiry)
//! - Durable session that survives restarts, hydrated once at startup
//! - Role-based navigation (Guest, Manager, Admin)
//!
//! ## Security Model
//! - Credentials are decoded, never verified: claims drive routing and
//!   display only, the API re-verifies the credential on every call
//! - A credential without an expiry is treated as expired
//! - Passwords are zeroized after use and redacted from debug output

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, AuthGateway, SessionContext};
pub use domain::{Role, SessionDecoder, SessionState, UserIdentity};
pub use error::{AuthError, AuthResult};
pub use infra::{HttpAuthApi, KvCredentialStore};
pub use presentation::{RouteAccessRequest, RouteDecision, RouteGuard, View};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::{
        credential::*, login::*, registration::*, session_state::*, user_identity::*,
    };
    pub use crate::domain::value_object::{
        contact_number::*, email::*, role::*, user_id::*,
    };
}
