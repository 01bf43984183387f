//! Tic-tac-toe engine with an exhaustive minimax opponent.
//!
//! This library provides the game-state engine and move selection for a
//! human-vs-computer tic-tac-toe game. The presentation layer (rendering,
//! input wiring, thinking delays) lives outside this crate and drives the
//! engine through a small synchronous API:
//!
//! - [`GameSession::start`] creates a fresh game with the human to move.
//! - [`GameSession::apply_move`] validates and applies one move, returning
//!   the resulting [`GameOutcome`].
//! - [`choose_move`] runs exhaustive minimax over a board snapshot and
//!   returns the computer's best cell.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{choose_move, GameOutcome, GameSession, Player, Position};
//!
//! let mut session = GameSession::start();
//! let outcome = session.apply_move(Position::Center, Player::Human)?;
//! assert_eq!(outcome, GameOutcome::InProgress);
//!
//! let reply = choose_move(session.board(), Player::Ai);
//! session.apply_move(reply, Player::Ai)?;
//! # Ok::<(), tictactoe_minimax::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod position;
mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - Board geometry
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{WinLine, check_win, is_draw, is_full};

// Crate-level exports - Minimax engine
pub use search::{Score, choose_move, evaluate};

// Crate-level exports - Session state machine
pub use session::{GameOutcome, GameSession};

// Crate-level exports - Core domain types
pub use types::{Board, Player, Square};
