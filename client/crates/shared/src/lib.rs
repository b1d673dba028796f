//! Shared Kernel - Cross-crate error vocabulary
//!
//! This crate holds the small set of types every client crate agrees on:
//! - [`error::kind::ErrorKind`], the HTTP-aligned classification of failures
//! - [`error::app_error::AppError`], the unified error carried to the app root
//!
//! Crate-specific errors (auth, resources, platform) convert into `AppError`
//! so the application root can report them uniformly.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
