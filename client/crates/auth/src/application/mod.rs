//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod gateway;
pub mod session_context;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use gateway::AuthGateway;
pub use session_context::SessionContext;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
