//! Record store contract for games.
//!
//! The session coordinator is the only caller. Any backend works as long as
//! `compare_and_swap` is linearizable per game id: that single primitive is
//! what serializes racing joins and moves.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{GameRecord, Version};
use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("game {0} not found")]
    NotFound(String),
    #[error("game id {0} already exists")]
    DuplicateGameId(String),
    #[error("version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: Version, actual: Version },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait GameStore: Send + Sync {
    /// Current record for `game_id`, with its version stamped in.
    async fn get(&self, game_id: &str) -> Result<Option<GameRecord>, StoreError>;

    /// Insert `record` at version 0 unless the id is taken.
    async fn create_if_absent(&self, record: GameRecord) -> Result<Version, StoreError>;

    /// Replace the record only if its stored version is still `expected`.
    ///
    /// On success the stored version becomes `expected + 1` and is returned.
    async fn compare_and_swap(
        &self,
        game_id: &str,
        expected: Version,
        record: GameRecord,
    ) -> Result<Version, StoreError>;
}

/// Load a game or fail with `GameNotFound`.
pub async fn require_game(store: &dyn GameStore, game_id: &str) -> Result<GameRecord, DomainError> {
    store
        .get(game_id)
        .await?
        .ok_or_else(|| DomainError::GameNotFound(game_id.to_string()))
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => DomainError::GameNotFound(id),
            StoreError::DuplicateGameId(id) => DomainError::DuplicateGameId(id),
            // Conflicts are normally absorbed by the coordinator's retry loop;
            // reaching here means a single-shot caller lost a race.
            StoreError::VersionConflict { .. } => DomainError::Conflict { attempts: 1 },
            StoreError::Unavailable(detail) => {
                DomainError::infra(InfraErrorKind::StoreUnavailable, detail)
            }
        }
    }
}
