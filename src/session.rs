//! Game session state machine.
//!
//! A [`GameSession`] exclusively owns the authoritative board. The search
//! never touches it; callers hand [`crate::choose_move`] a board snapshot
//! and feed the chosen position back through [`GameSession::apply_move`].

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{WinLine, check_win, is_full};
use crate::types::{Board, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of the game after a move.
///
/// Always derived from the board, never stored redundantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win on the given line.
    Win(Player, WinLine),
    /// Game ended with a full board and no winner.
    Tie,
}

/// One human-vs-computer game.
///
/// Lifecycle: created by [`GameSession::start`] with an empty board and the
/// human to move; mutated once per accepted move; permanently inactive once
/// a win or tie is detected. Start a new session for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    active: bool,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a fresh game: all squares empty, human (X) to move.
    #[instrument]
    pub fn start() -> Self {
        debug!("starting new game session");
        Self {
            board: Board::new(),
            active: true,
            history: Vec::new(),
        }
    }

    /// Returns the authoritative board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns whether the session still accepts moves.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the move history in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player whose turn it is, derived from mark counts.
    ///
    /// X moves first and turns strictly alternate, so the human is to move
    /// exactly when both players hold the same number of squares.
    pub fn current_player(&self) -> Player {
        if self.board.count(Player::Human) == self.board.count(Player::Ai) {
            Player::Human
        } else {
            Player::Ai
        }
    }

    /// Recomputes the outcome from the current board.
    pub fn outcome(&self) -> GameOutcome {
        for player in [Player::Human, Player::Ai] {
            if let Some(line) = check_win(&self.board, player) {
                return GameOutcome::Win(player, line);
            }
        }
        if is_full(&self.board) {
            return GameOutcome::Tie;
        }
        GameOutcome::InProgress
    }

    /// Applies one move for the given player.
    ///
    /// The move is rejected with [`MoveError::InvalidMove`] when the game
    /// is already over or the target square is occupied; a rejected move
    /// has no observable effect. On success the mark is placed and the
    /// outcome is evaluated: the mover's win lines first (only the mover
    /// can win on their own move), then a full-board tie, otherwise the
    /// game continues. The session deactivates on a terminal outcome.
    #[instrument(skip(self), fields(position = %position, player = %player))]
    pub fn apply_move(
        &mut self,
        position: Position,
        player: Player,
    ) -> Result<GameOutcome, MoveError> {
        if !self.active || !self.board.is_empty(position) {
            debug!("move rejected");
            return Err(MoveError::InvalidMove);
        }

        // Turn order is the caller's contract, not a runtime error.
        debug_assert_eq!(player, self.current_player(), "move out of turn");

        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));

        let outcome = if let Some(line) = check_win(&self.board, player) {
            GameOutcome::Win(player, line)
        } else if is_full(&self.board) {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        };

        if outcome != GameOutcome::InProgress {
            debug!(?outcome, "game over");
            self.active = false;
        }

        Ok(outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::start()
    }
}
