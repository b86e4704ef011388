//! The authoritative per-game record and its lifecycle view.

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};

pub type Version = u64;

/// Game outcome. Serialized as `"X"`, `"O"` or `"Draw"`; an unfinished game
/// carries `winner: null` on the record instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    X,
    O,
    Draw,
}

impl From<Mark> for Winner {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Winner::X,
            Mark::O => Winner::O,
        }
    }
}

/// Participant ids per mark. `X` is set at creation, `O` once on join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    #[serde(rename = "X")]
    pub x: String,
    #[serde(rename = "O")]
    pub o: Option<String>,
}

impl Players {
    pub fn get(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => Some(self.x.as_str()),
            Mark::O => self.o.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub game_id: String,
    pub board: Board,
    /// Whose move is next. Not meaningful once `winner` is set.
    pub current_player: Mark,
    pub winner: Option<Winner>,
    pub move_count: u8,
    pub players: Players,
    /// Optimistic-concurrency key. Stamped by the store, never by the engine.
    pub version: Version,
}

impl GameRecord {
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }
}

/// Coordinator-level lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Created; `O` has not joined yet.
    Created,
    /// Both players present, no winner.
    InProgress,
    /// Winner or draw recorded. Terminal.
    Finished,
}

impl GameStatus {
    pub fn of(record: &GameRecord) -> Self {
        if record.is_finished() {
            GameStatus::Finished
        } else if record.players.o.is_none() {
            GameStatus::Created
        } else {
            GameStatus::InProgress
        }
    }
}
