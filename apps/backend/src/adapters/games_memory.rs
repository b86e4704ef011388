//! In-memory adapter for the game record store.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

use crate::domain::{GameRecord, Version};
use crate::repos::games::{GameStore, StoreError};

/// DashMap-backed `GameStore`.
///
/// Each operation touches one entry and holds its shard guard only for the
/// compare and the write, so CAS is linearizable per game id while
/// different games proceed in parallel. No guard outlives the call.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: DashMap<String, GameRecord>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn get(&self, game_id: &str) -> Result<Option<GameRecord>, StoreError> {
        Ok(self.games.get(game_id).map(|entry| entry.value().clone()))
    }

    async fn create_if_absent(&self, mut record: GameRecord) -> Result<Version, StoreError> {
        match self.games.entry(record.game_id.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateGameId(record.game_id)),
            Entry::Vacant(slot) => {
                record.version = 0;
                trace!(game_id = %record.game_id, "game inserted");
                slot.insert(record);
                Ok(0)
            }
        }
    }

    async fn compare_and_swap(
        &self,
        game_id: &str,
        expected: Version,
        mut record: GameRecord,
    ) -> Result<Version, StoreError> {
        let mut entry = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| StoreError::NotFound(game_id.to_string()))?;

        let actual = entry.version;
        if actual != expected {
            return Err(StoreError::VersionConflict { expected, actual });
        }

        let next = expected + 1;
        record.game_id = game_id.to_string();
        record.version = next;
        *entry = record;
        trace!(game_id, version = next, "game swapped");
        Ok(next)
    }
}
