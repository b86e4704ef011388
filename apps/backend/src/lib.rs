#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use adapters::InMemoryGameStore;
pub use auth::{ClaimSigner, JwtSigner, RoleClaim};
pub use config::ServerConfig;
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{GameToken, ValidatedJson};
pub use middleware::{RequestTrace, TraceSpan};
pub use repos::{GameStore, StoreError};
pub use services::{Initiated, SessionCoordinator};
pub use state::{build_state, AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
