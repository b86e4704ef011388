//! Game engine: pure decision logic over a `GameRecord`.
//!
//! Nothing here performs I/O or touches the version field; every function
//! takes the current record by reference and hands back a new one, so the
//! coordinator can re-run the same action against a fresher record after a
//! lost compare-and-swap.

use tracing::trace;

use super::board::{Board, Mark, BOARD_CELLS};
use super::ids::generate_id;
use super::record::{GameRecord, Players, Winner};
use crate::errors::domain::DomainError;

/// Freshly created game plus the creator's participant id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub game_id: String,
    pub participant_id: String,
    pub record: GameRecord,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joined {
    pub record: GameRecord,
    pub participant_id: String,
}

/// Build the initial record for a new game with the creator holding `X`.
pub fn create() -> Result<NewGame, DomainError> {
    let game_id = generate_id()?;
    let participant_id = generate_id()?;

    let record = GameRecord {
        game_id: game_id.clone(),
        board: Board::empty(),
        current_player: Mark::X,
        winner: None,
        move_count: 0,
        players: Players {
            x: participant_id.clone(),
            o: None,
        },
        version: 0,
    };

    Ok(NewGame {
        game_id,
        participant_id,
        record,
    })
}

/// Seat a second participant as `O`.
///
/// A finished game reports `GameEnded`; otherwise an occupied `O` seat
/// reports `GameNotJoinable`.
pub fn join(record: &GameRecord) -> Result<Joined, DomainError> {
    if record.is_finished() {
        return Err(DomainError::GameEnded);
    }
    if record.players.o.is_some() {
        return Err(DomainError::GameNotJoinable);
    }

    let participant_id = generate_id()?;
    let mut next = record.clone();
    next.players.o = Some(participant_id.clone());

    Ok(Joined {
        record: next,
        participant_id,
    })
}

/// Place `role`'s mark at `position`.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. position on the board (`InvalidPosition`)
/// 2. game not finished (`GameEnded`)
/// 3. `role` is the current player (`NotYourTurn`)
/// 4. cell is empty (`PositionTaken`)
pub fn apply_move(
    record: &GameRecord,
    role: Mark,
    position: usize,
) -> Result<GameRecord, DomainError> {
    if position >= BOARD_CELLS {
        return Err(DomainError::InvalidPosition(position));
    }
    if record.is_finished() {
        return Err(DomainError::GameEnded);
    }
    if role != record.current_player {
        return Err(DomainError::NotYourTurn);
    }
    if !record.board.0[position].is_empty() {
        return Err(DomainError::PositionTaken(position));
    }

    let mut next = record.clone();
    next.board = record.board.with_mark(position, role);
    next.move_count = record.move_count + 1;

    if let Some(mark) = next.board.winning_mark() {
        next.winner = Some(Winner::from(mark));
    } else if usize::from(next.move_count) == BOARD_CELLS {
        next.winner = Some(Winner::Draw);
    } else {
        next.current_player = role.other();
    }

    trace!(
        game_id = %next.game_id,
        role = %role,
        position,
        move_count = next.move_count,
        winner = ?next.winner,
        "move applied"
    );

    Ok(next)
}
