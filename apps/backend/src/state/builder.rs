use std::sync::Arc;

use crate::adapters::InMemoryGameStore;
use crate::auth::JwtSigner;
use crate::config::server::DEFAULT_MAX_ATTEMPTS;
use crate::repos::GameStore;
use crate::services::SessionCoordinator;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    store: Option<Arc<dyn GameStore>>,
    max_attempts: usize,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            store: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Use a specific store instead of a fresh in-memory one.
    pub fn with_store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn build(self) -> AppState {
        let store: Arc<dyn GameStore> = match self.store {
            Some(store) => store,
            None => Arc::new(InMemoryGameStore::new()),
        };
        let signer = Arc::new(JwtSigner::new(self.security_config));
        let sessions = SessionCoordinator::new(store, signer.clone())
            .with_max_attempts(self.max_attempts);

        AppState::new(Arc::new(sessions), signer)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
