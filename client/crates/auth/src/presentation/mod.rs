//! Presentation Layer
//!
//! Route table and access guard consumed by the views.

pub mod route_guard;
pub mod routes;

pub use route_guard::{RouteAccessRequest, RouteDecision, RouteGuard};
pub use routes::{RouteAccess, View, resolve};
