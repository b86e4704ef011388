use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::auth::JwtSigner;
use crate::services::SessionCoordinator;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    /// Runs all game operations against the shared store
    pub sessions: Arc<SessionCoordinator>,
    /// Verifies bearer tokens on the way in; the coordinator mints through the same key
    pub signer: Arc<JwtSigner>,
}

impl AppState {
    pub fn new(sessions: Arc<SessionCoordinator>, signer: Arc<JwtSigner>) -> Self {
        Self { sessions, signer }
    }

    pub fn security(&self) -> &SecurityConfig {
        self.signer.security()
    }
}
