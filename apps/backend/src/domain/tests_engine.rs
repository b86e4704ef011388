use crate::domain::board::{Cell, Mark};
use crate::domain::engine::{apply_move, create, join};
use crate::domain::record::{GameStatus, Winner};
use crate::domain::test_state_helpers::{joined_record, record_from};
use crate::errors::domain::DomainError;

fn play(moves: &[(Mark, usize)]) -> crate::domain::record::GameRecord {
    moves.iter().fold(joined_record(), |record, &(role, pos)| {
        apply_move(&record, role, pos).unwrap()
    })
}

#[test]
fn create_starts_empty_with_x_to_move() {
    let new_game = create().unwrap();
    let r = &new_game.record;

    assert_eq!(r.game_id, new_game.game_id);
    assert_eq!(r.players.x, new_game.participant_id);
    assert_eq!(r.players.o, None);
    assert_eq!(r.current_player, Mark::X);
    assert_eq!(r.winner, None);
    assert_eq!(r.move_count, 0);
    assert_eq!(r.version, 0);
    assert_eq!(r.board.occupied(), 0);
    assert_eq!(r.status(), GameStatus::Created);
    assert_ne!(new_game.game_id, new_game.participant_id);
}

#[test]
fn join_seats_o_without_touching_version() {
    let created = create().unwrap().record;
    let joined = join(&created).unwrap();

    assert_eq!(
        joined.record.players.o.as_deref(),
        Some(joined.participant_id.as_str())
    );
    assert_eq!(joined.record.players.x, created.players.x);
    assert_eq!(joined.record.version, created.version);
    assert_eq!(joined.record.status(), GameStatus::InProgress);
}

#[test]
fn second_join_is_rejected() {
    let err = join(&joined_record()).unwrap_err();
    assert_eq!(err, DomainError::GameNotJoinable);
}

#[test]
fn join_on_finished_game_reports_game_ended() {
    let finished = record_from("XXXOO....", Mark::X, Some(Winner::X));
    assert_eq!(join(&finished).unwrap_err(), DomainError::GameEnded);
}

#[test]
fn x_wins_top_row() {
    let r = play(&[
        (Mark::X, 0),
        (Mark::O, 3),
        (Mark::X, 1),
        (Mark::O, 4),
        (Mark::X, 2),
    ]);

    assert_eq!(r.winner, Some(Winner::X));
    assert_eq!(r.move_count, 5);
    let expected = [
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::X),
        Cell::Taken(Mark::O),
        Cell::Taken(Mark::O),
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
    ];
    assert_eq!(r.board.0, expected);
    // Winning move leaves current_player on the winner.
    assert_eq!(r.current_player, Mark::X);
}

#[test]
fn o_moving_first_is_not_your_turn() {
    let err = apply_move(&joined_record(), Mark::O, 0).unwrap_err();
    assert_eq!(err, DomainError::NotYourTurn);
}

#[test]
fn occupied_cell_is_position_taken_and_board_unchanged() {
    let after_x = play(&[(Mark::X, 0)]);
    let err = apply_move(&after_x, Mark::O, 0).unwrap_err();

    assert_eq!(err, DomainError::PositionTaken(0));
    assert_eq!(after_x.board.0[0], Cell::Taken(Mark::X));
    assert_eq!(after_x.move_count, 1);
}

#[test]
fn full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let r = play(&[
        (Mark::X, 0),
        (Mark::O, 1),
        (Mark::X, 2),
        (Mark::O, 4),
        (Mark::X, 3),
        (Mark::O, 5),
        (Mark::X, 7),
        (Mark::O, 6),
        (Mark::X, 8),
    ]);

    assert_eq!(r.move_count, 9);
    assert_eq!(r.winner, Some(Winner::Draw));
}

#[test]
fn win_on_last_cell_beats_draw() {
    // X O X
    // O O X
    // O X .   -> X at 8 completes the right column
    let before = record_from("XOXOOXOX.", Mark::X, None);
    assert_eq!(before.move_count, 8);

    let r = apply_move(&before, Mark::X, 8).unwrap();
    assert_eq!(r.winner, Some(Winner::X));
}

#[test]
fn out_of_range_position_is_rejected_first() {
    // Finished game, wrong player, and a bad index: bounds check wins.
    let finished = record_from("XXXOO....", Mark::X, Some(Winner::X));
    assert_eq!(
        apply_move(&finished, Mark::O, 9).unwrap_err(),
        DomainError::InvalidPosition(9)
    );
}

#[test]
fn game_ended_outranks_turn_and_occupancy() {
    let finished = record_from("XXXOO....", Mark::X, Some(Winner::X));
    // Wrong role on an occupied cell of a finished game.
    assert_eq!(
        apply_move(&finished, Mark::O, 0).unwrap_err(),
        DomainError::GameEnded
    );
}

#[test]
fn turn_outranks_occupancy() {
    let r = play(&[(Mark::X, 4)]);
    // X tries again on its own cell: it is O's turn.
    assert_eq!(
        apply_move(&r, Mark::X, 4).unwrap_err(),
        DomainError::NotYourTurn
    );
}

#[test]
fn rejection_is_idempotent() {
    let r = play(&[(Mark::X, 0)]);
    let first = apply_move(&r, Mark::O, 0).unwrap_err();
    let second = apply_move(&r, Mark::O, 0).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn apply_move_does_not_mutate_input() {
    let before = joined_record();
    let snapshot = before.clone();
    let _ = apply_move(&before, Mark::X, 4).unwrap();
    assert_eq!(before, snapshot);
}

#[test]
fn x_may_open_before_o_joins() {
    let created = create().unwrap().record;
    let r = apply_move(&created, Mark::X, 4).unwrap();
    assert_eq!(r.current_player, Mark::O);
    assert_eq!(r.status(), GameStatus::Created);
}
