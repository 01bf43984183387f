//! Tests for the exhaustive minimax engine.

use tictactoe_minimax::{
    Board, GameOutcome, GameSession, Player, Position, Square, choose_move, evaluate,
};

fn board_from(human: &[usize], ai: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in human {
        let pos = Position::from_index(index).unwrap();
        board.set(pos, Square::Occupied(Player::Human));
    }
    for &index in ai {
        let pos = Position::from_index(index).unwrap();
        board.set(pos, Square::Occupied(Player::Ai));
    }
    board
}

#[test]
fn test_single_empty_cell_is_chosen() {
    // Eight marks, no winner, only bottom-center open.
    let board = board_from(&[0, 2, 4, 5], &[1, 3, 6, 8]);

    assert_eq!(choose_move(&board, Player::Human), Position::BottomCenter);
    assert_eq!(choose_move(&board, Player::Ai), Position::BottomCenter);
}

#[test]
fn test_evaluate_leaves_board_untouched() {
    let board = board_from(&[0, 4], &[8]);
    let snapshot = board.clone();

    evaluate(&board, Player::Ai);
    assert_eq!(board, snapshot);

    choose_move(&board, Player::Ai);
    assert_eq!(board, snapshot);
}

#[test]
fn test_ai_opening_move_is_corner_or_center() {
    let board = Board::new();
    let opening = choose_move(&board, Player::Ai);

    let strong_openings = [
        Position::TopLeft,
        Position::TopRight,
        Position::Center,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    assert!(strong_openings.contains(&opening), "weak opening {opening}");

    // Any optimal opening leaves a forced tie under best counterplay.
    let mut after = board.clone();
    after.set(opening, Square::Occupied(Player::Ai));
    assert_eq!(evaluate(&after, Player::Human), 0);
}

#[test]
fn test_ai_blocks_human_threat_at_lowest_index() {
    // X threatens the top row at 2; O threatens the middle row at 5.
    // Both continuations force a computer win, so the first-scanned
    // candidate (the block at index 2) must be kept.
    let board = board_from(&[0, 1], &[3, 4]);
    assert_eq!(choose_move(&board, Player::Ai), Position::TopRight);
}

#[test]
fn test_optimal_play_always_ties() {
    let mut session = GameSession::start();
    let mut outcome = GameOutcome::InProgress;

    while session.is_active() {
        let player = session.current_player();
        let position = choose_move(session.board(), player);
        outcome = session.apply_move(position, player).unwrap();
    }

    assert_eq!(outcome, GameOutcome::Tie);
    assert_eq!(session.history().len(), 9);
}
