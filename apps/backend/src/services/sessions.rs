//! Session coordinator: runs engine decisions against the record store.
//!
//! Every mutation follows the same loop: read the record, let the engine
//! decide, then compare-and-swap at the version that was read. A lost swap
//! means someone else wrote first, so the loop re-reads and asks the engine
//! again. Re-deciding against fresh state is what turns a race into either a
//! clean rule rejection or a correct retry. The store's CAS is the only
//! synchronization; the coordinator holds no locks of its own and can be
//! replicated freely over a shared store.
//!
//! Dropping a call mid-loop never undoes a completed swap: there is nothing
//! to roll back, the caller simply does not see the result.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::auth::{ClaimSigner, RoleClaim};
use crate::config::server::DEFAULT_MAX_ATTEMPTS;
use crate::domain::{engine, GameRecord, GameStatus, Mark};
use crate::errors::domain::DomainError;
use crate::repos::games::{require_game, GameStore, StoreError};

/// Creation retries once with a fresh id if the first one collides.
const CREATE_ATTEMPTS: usize = 2;

/// Outcome of `initiate`: the new game's id and the creator's `X` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initiated {
    pub game_id: String,
    pub token: String,
}

pub struct SessionCoordinator {
    store: Arc<dyn GameStore>,
    signer: Arc<dyn ClaimSigner>,
    max_attempts: usize,
}

impl SessionCoordinator {
    pub fn new(store: Arc<dyn GameStore>, signer: Arc<dyn ClaimSigner>) -> Self {
        Self {
            store,
            signer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Bound on compare-and-swap attempts for `join` and `make_move`.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Create a game and return its id with a token for the creator as `X`.
    pub async fn initiate(&self) -> Result<Initiated, DomainError> {
        let mut last_collision = None;

        for attempt in 1..=CREATE_ATTEMPTS {
            let new_game = engine::create()?;
            let token = self.signer.mint(&RoleClaim {
                game_id: new_game.game_id.clone(),
                participant_id: new_game.participant_id.clone(),
                role: Mark::X,
            })?;

            match self.store.create_if_absent(new_game.record).await {
                Ok(version) => {
                    info!(game_id = %new_game.game_id, version, "Game initiated");
                    return Ok(Initiated {
                        game_id: new_game.game_id,
                        token,
                    });
                }
                Err(StoreError::DuplicateGameId(id)) => {
                    warn!(game_id = %id, attempt, "Generated game id collided; regenerating");
                    last_collision = Some(id);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(DomainError::DuplicateGameId(
            last_collision.unwrap_or_default(),
        ))
    }

    /// Seat a second participant as `O` and return their token.
    pub async fn join(&self, game_id: &str) -> Result<String, DomainError> {
        let (record, token) = self
            .run_mutation(game_id, "join", |current| {
                let joined = engine::join(current)?;
                let token = self.signer.mint(&RoleClaim {
                    game_id: current.game_id.clone(),
                    participant_id: joined.participant_id,
                    role: Mark::O,
                })?;
                Ok((joined.record, token))
            })
            .await?;

        info!(game_id, version = record.version, "Player joined as O");
        Ok(token)
    }

    /// Read-only view of the current record.
    pub async fn get_state(&self, game_id: &str) -> Result<GameRecord, DomainError> {
        require_game(self.store.as_ref(), game_id).await
    }

    pub async fn status(&self, game_id: &str) -> Result<GameStatus, DomainError> {
        Ok(self.get_state(game_id).await?.status())
    }

    /// Apply `role`'s move at `position` and return the new record.
    pub async fn make_move(
        &self,
        game_id: &str,
        role: Mark,
        position: usize,
    ) -> Result<GameRecord, DomainError> {
        let (record, ()) = self
            .run_mutation(game_id, "move", |current| {
                engine::apply_move(current, role, position).map(|next| (next, ()))
            })
            .await?;

        info!(
            game_id,
            role = %role,
            position,
            version = record.version,
            winner = ?record.winner,
            "Move accepted"
        );
        Ok(record)
    }

    /// Read, decide, compare-and-swap; repeat on version conflicts.
    ///
    /// `decide` must be side-effect free apart from minting: it may run once
    /// per attempt. Its errors are returned as-is without retrying, since the
    /// same input against the same record would fail the same way.
    async fn run_mutation<T, F>(
        &self,
        game_id: &str,
        op: &'static str,
        decide: F,
    ) -> Result<(GameRecord, T), DomainError>
    where
        F: Fn(&GameRecord) -> Result<(GameRecord, T), DomainError>,
    {
        for attempt in 1..=self.max_attempts {
            let current = require_game(self.store.as_ref(), game_id).await?;
            debug!(game_id, op, attempt, version = current.version, "Evaluating");

            let (mut next, extra) = decide(&current)?;

            match self
                .store
                .compare_and_swap(game_id, current.version, next.clone())
                .await
            {
                Ok(version) => {
                    next.version = version;
                    return Ok((next, extra));
                }
                Err(StoreError::VersionConflict { expected, actual }) => {
                    warn!(game_id, op, attempt, expected, actual, "Version conflict");
                    if attempt < self.max_attempts {
                        tokio::time::sleep(backoff(attempt)).await;
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(
            game_id,
            op,
            attempts = self.max_attempts,
            "Giving up after repeated version conflicts"
        );
        Err(DomainError::Conflict {
            attempts: self.max_attempts,
        })
    }
}

/// 1, 2, 4 ms (capped) plus up to 2 ms of jitter.
fn backoff(attempt: usize) -> Duration {
    let shift = attempt.saturating_sub(1).min(2) as u32;
    let base_ms = 1u64 << shift;
    let jitter_ms = rand::rng().random_range(0..=2u64);
    Duration::from_millis(base_ms + jitter_ms)
}
