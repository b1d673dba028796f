//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the booking client:
//! - HTTP API client with bearer-token injection
//! - Compact JWT payload decoding (no signature verification)
//! - Durable key-value storage (file-backed and in-memory)
//! - Clear-text password handling with zeroization

pub mod client;
pub mod jwt;
pub mod password;
pub mod storage;
