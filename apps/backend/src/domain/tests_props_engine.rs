//! Property-based tests for the engine's record invariants.
//! Increase cases locally with: PROPTEST_CASES=1000 cargo test

use proptest::prelude::*;

use crate::domain::board::{Board, Cell, Mark, BOARD_CELLS};
use crate::domain::engine::apply_move;
use crate::domain::record::{GameRecord, Winner};
use crate::domain::test_state_helpers::joined_record;
use crate::domain::{test_gens, test_prelude};
use crate::errors::domain::DomainError;

/// Quarter turn clockwise: new[r][c] = old[2 - c][r].
const ROTATE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
/// Mirror across the vertical axis.
const REFLECT: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

fn permute(board: &Board, map: &[usize; 9]) -> Board {
    let mut cells = [Cell::Empty; BOARD_CELLS];
    for (dst, &src) in map.iter().enumerate() {
        cells[dst] = board.0[src];
    }
    Board(cells)
}

fn has_line(board: &Board, mark: Mark) -> bool {
    crate::domain::WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.0[i] == Cell::Taken(mark)))
}

/// Replays `order` with alternating roles until the game ends, returning
/// every intermediate record (including the initial one).
fn replay(order: &[usize]) -> Vec<GameRecord> {
    let mut history = vec![joined_record()];
    for &pos in order {
        let current = history.last().cloned().unwrap_or_else(joined_record);
        if current.winner.is_some() {
            break;
        }
        let next = apply_move(&current, current.current_player, pos)
            .expect("shuffled order never revisits a cell");
        history.push(next);
    }
    history
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: move_count equals the number of successful moves and the
    /// number of occupied cells, and turns alternate starting with X.
    #[test]
    fn prop_move_count_tracks_occupied_cells(order in test_gens::move_order()) {
        let history = replay(&order);

        for (k, record) in history.iter().enumerate() {
            prop_assert_eq!(usize::from(record.move_count), k);
            prop_assert_eq!(record.board.occupied(), k);
        }

        for pair in history.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            if after.winner.is_none() {
                prop_assert_eq!(after.current_player, before.current_player.other());
            }
        }

        prop_assert_eq!(history[0].current_player, Mark::X);
    }

    /// Property: terminal records are consistent with the board, and a
    /// game never stops before it is decided.
    #[test]
    fn prop_winner_matches_board(order in test_gens::move_order()) {
        let history = replay(&order);
        let last = history.last().cloned().unwrap_or_else(joined_record);

        match last.winner {
            Some(Winner::X) => prop_assert!(has_line(&last.board, Mark::X)),
            Some(Winner::O) => prop_assert!(has_line(&last.board, Mark::O)),
            Some(Winner::Draw) => {
                prop_assert_eq!(usize::from(last.move_count), BOARD_CELLS);
                prop_assert!(!has_line(&last.board, Mark::X));
                prop_assert!(!has_line(&last.board, Mark::O));
            }
            None => prop_assert!(false, "all nine cells offered but no outcome"),
        }

        // No record before the last one is terminal.
        for record in &history[..history.len() - 1] {
            prop_assert!(record.winner.is_none());
        }
    }

    /// Property: once finished, every further move is GameEnded and the
    /// board does not change.
    #[test]
    fn prop_finished_game_is_frozen(
        order in test_gens::move_order(),
        role in test_gens::mark(),
        pos in 0usize..BOARD_CELLS,
    ) {
        let history = replay(&order);
        let last = history.last().cloned().unwrap_or_else(joined_record);
        prop_assume!(last.winner.is_some());

        prop_assert_eq!(apply_move(&last, role, pos), Err(DomainError::GameEnded));
    }

    /// Property: a line filled by one mark wins regardless of which of the
    /// eight lines it is, with opponents or gaps elsewhere.
    #[test]
    fn prop_any_line_wins(
        line in test_gens::winning_line(),
        mark in test_gens::mark(),
        filler in proptest::collection::vec(any::<bool>(), BOARD_CELLS),
    ) {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            if filler[i] {
                *cell = Cell::Taken(mark.other());
            }
        }
        for idx in line {
            cells[idx] = Cell::Taken(mark);
        }
        let board = Board(cells);
        prop_assume!(!has_line(&board, mark.other()));

        prop_assert_eq!(board.winning_mark(), Some(mark));
    }

    /// Property: win detection is invariant under rotation and reflection.
    #[test]
    fn prop_win_detection_symmetric(
        raw in proptest::collection::vec(0u8..3, BOARD_CELLS),
    ) {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, v) in raw.iter().enumerate() {
            cells[i] = match v {
                1 => Cell::Taken(Mark::X),
                2 => Cell::Taken(Mark::O),
                _ => Cell::Empty,
            };
        }
        let board = Board(cells);
        // With both marks holding a line the first-found answer is order dependent.
        prop_assume!(!(has_line(&board, Mark::X) && has_line(&board, Mark::O)));

        let expected = board.winning_mark();
        let mut rotated = board;
        for _ in 0..4 {
            rotated = permute(&rotated, &ROTATE);
            prop_assert_eq!(rotated.winning_mark(), expected);
            prop_assert_eq!(permute(&rotated, &REFLECT).winning_mark(), expected);
        }
    }

    /// Property: evaluating the same move against the same record twice
    /// gives the same answer.
    #[test]
    fn prop_apply_move_is_deterministic(
        order in test_gens::move_order(),
        prefix in 0usize..BOARD_CELLS,
        role in test_gens::mark(),
        pos in test_gens::any_position(),
    ) {
        let history = replay(&order[..prefix]);
        let record = history.last().cloned().unwrap_or_else(joined_record);

        prop_assert_eq!(apply_move(&record, role, pos), apply_move(&record, role, pos));
    }
}
