//! Domain layer: pure game logic types and helpers.

pub mod board;
pub mod engine;
pub mod ids;
pub mod record;

#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_engine;
#[cfg(test)]
mod tests_props_engine;

// Re-exports for ergonomics
pub use board::{Board, Cell, Mark, BOARD_CELLS, WINNING_LINES};
pub use engine::{apply_move, create, join, Joined, NewGame};
pub use ids::generate_id;
pub use record::{GameRecord, GameStatus, Players, Version, Winner};
