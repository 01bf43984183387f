//! Exhaustive minimax move selection.
//!
//! The game tree for 3x3 tic-tac-toe is tiny (at most 9! leaf states from
//! an empty board), so the search runs full-width to exhaustion with no
//! pruning. The computer maximizes the score, the human minimizes it.
//!
//! Terminal scores are flat: a human win is worth [`HUMAN_WIN`] and a
//! computer win [`AI_WIN`] regardless of depth. The engine is therefore
//! indifferent among equally winning continuations and does not prefer a
//! faster win over a slower one; among equal scores the lowest-index
//! candidate wins. This mirrors the reference behavior and keeps move
//! choices reproducible.

use crate::position::Position;
use crate::rules::{check_win, is_full};
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Backed-up minimax value of a position.
pub type Score = i32;

/// Score of a board where the computer has completed a line.
pub const AI_WIN: Score = 10;

/// Score of a board where the human has completed a line.
pub const HUMAN_WIN: Score = -10;

/// Score of a full board with no winner.
pub const TIE: Score = 0;

/// Chooses the best move for `to_move` by exhaustive minimax.
///
/// Scans empty squares in increasing index order; among equally scored
/// candidates the first one found is kept.
///
/// # Panics
///
/// Panics if the board has no empty square. The turn sequencer only asks
/// for a move on a non-terminal board, so a full board here is a wiring
/// bug, not a runtime condition.
#[instrument(skip(board))]
pub fn choose_move(board: &Board, to_move: Player) -> Position {
    let mut work = board.clone();
    let mut best: Option<(Position, Score)> = None;

    for pos in Position::ALL {
        if !work.is_empty(pos) {
            continue;
        }
        work.set(pos, Square::Occupied(to_move));
        let score = minimax(&mut work, to_move.opponent());
        work.set(pos, Square::Empty);

        if best.is_none_or(|(_, held)| beats(to_move, score, held)) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best.expect("choose_move requires at least one empty square");
    debug!(position = %position, score, "minimax selected move");
    position
}

/// Evaluates a board with `to_move` to play, by exhaustive minimax.
///
/// Returns the terminal score directly when the board is already decided
/// (human win, computer win, or full). The input board is untouched: the
/// recursion works on a private copy.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, to_move: Player) -> Score {
    let mut work = board.clone();
    minimax(&mut work, to_move)
}

/// Recursive core. Places hypothetical marks directly on `board` and
/// restores each one after its subtree returns, so sibling branches never
/// observe each other's placements.
fn minimax(board: &mut Board, to_move: Player) -> Score {
    // Terminal checks come first at every level, human lines before
    // computer lines, tie last.
    if check_win(board, Player::Human).is_some() {
        return HUMAN_WIN;
    }
    if check_win(board, Player::Ai).is_some() {
        return AI_WIN;
    }
    if is_full(board) {
        return TIE;
    }

    let mut best: Option<Score> = None;
    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, to_move.opponent());
        board.set(pos, Square::Empty);

        if best.is_none_or(|held| beats(to_move, score, held)) {
            best = Some(score);
        }
    }

    best.expect("non-terminal board has at least one move")
}

/// Whether `score` strictly improves on `held` for the given player.
fn beats(to_move: Player, score: Score, held: Score) -> bool {
    match to_move {
        Player::Ai => score > held,
        Player::Human => score < held,
    }
}
