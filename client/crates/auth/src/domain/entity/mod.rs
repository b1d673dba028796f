//! Entity Module

pub mod credential;
pub mod login;
pub mod registration;
pub mod session_state;
pub mod user_identity;
