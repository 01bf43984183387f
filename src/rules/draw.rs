//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Player};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full with no winner for either player.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
        && check_win(board, Player::Human).is_none()
        && check_win(board, Player::Ai).is_none()
}
