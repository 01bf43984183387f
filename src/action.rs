//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the player's
//! intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Move {
    player: Player,
    position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player.mark(), self.position.label())
    }
}

/// Error returned when a move is rejected.
///
/// A rejected move leaves the session untouched; the presentation layer
/// decides whether to surface any feedback. Everything else that could go
/// wrong (turn-order violations, search on a finished board) is a
/// programming-contract break, not a runtime error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::Display,
)]
pub enum MoveError {
    /// The target square is occupied, or the game is already over.
    #[display("Move rejected: square occupied or game over")]
    InvalidMove,
}

impl std::error::Error for MoveError {}
