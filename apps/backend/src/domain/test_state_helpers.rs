use crate::domain::board::{Board, Cell, Mark};
use crate::domain::record::{GameRecord, Players, Winner};

/// Record for a joined game with no moves yet.
pub fn joined_record() -> GameRecord {
    GameRecord {
        game_id: "00c0ffee".to_string(),
        board: Board::empty(),
        current_player: Mark::X,
        winner: None,
        move_count: 0,
        players: Players {
            x: "11111111".to_string(),
            o: Some("22222222".to_string()),
        },
        version: 1,
    }
}

/// Build a record from a 9-char layout (`X`, `O`, anything else empty).
///
/// `move_count` is derived from the layout; `current_player` and `winner`
/// are taken as given so tests can set up terminal states directly.
pub fn record_from(layout: &str, current_player: Mark, winner: Option<Winner>) -> GameRecord {
    let mut cells = [Cell::Empty; 9];
    for (i, ch) in layout.chars().take(9).enumerate() {
        cells[i] = match ch {
            'X' => Cell::Taken(Mark::X),
            'O' => Cell::Taken(Mark::O),
            _ => Cell::Empty,
        };
    }
    let board = Board(cells);
    GameRecord {
        move_count: board.occupied() as u8,
        board,
        current_player,
        winner,
        ..joined_record()
    }
}
