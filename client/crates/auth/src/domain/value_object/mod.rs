//! Value Object Module

pub mod contact_number;
pub mod email;
pub mod role;
pub mod user_id;
