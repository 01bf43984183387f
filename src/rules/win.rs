//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in their fixed enumeration order: rows, columns,
/// then diagonals.
///
/// The order is part of the engine contract. [`check_win`] reports the
/// first satisfied line in this order, so a renderer highlighting the
/// winning triple sees a stable choice even on boards where two lines
/// complete at once.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// One of the eight fixed winning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WinLine {
    index: usize,
    cells: [Position; 3],
}

impl WinLine {
    /// Index of this line in the fixed enumeration (0-7).
    pub fn index(&self) -> usize {
        self.index
    }

    /// The three positions that make up this line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// All 8 winning lines in enumeration order.
    pub fn all() -> [WinLine; 8] {
        std::array::from_fn(|index| WinLine {
            index,
            cells: LINES[index],
        })
    }
}

/// Checks whether the given player has completed a winning line.
///
/// Returns the first satisfied line in the fixed enumeration order, or
/// `None` if the player has no three-in-a-row.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> Option<WinLine> {
    for (index, cells) in LINES.iter().enumerate() {
        if cells
            .iter()
            .all(|&pos| board.get(pos) == Square::Occupied(player))
        {
            return Some(WinLine {
                index,
                cells: *cells,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_win(&board, Player::Human), None);
        assert_eq!(check_win(&board, Player::Ai), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Human));
        board.set(Position::TopRight, Square::Occupied(Player::Human));

        let line = check_win(&board, Player::Human).unwrap();
        assert_eq!(line.index(), 0);
        assert_eq!(
            line.cells(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
        assert_eq!(check_win(&board, Player::Ai), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Ai));
        board.set(Position::Center, Square::Occupied(Player::Ai));
        board.set(Position::BottomRight, Square::Occupied(Player::Ai));

        let line = check_win(&board, Player::Ai).unwrap();
        assert_eq!(line.index(), 6);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Human));
        assert_eq!(check_win(&board, Player::Human), None);
    }

    #[test]
    fn test_each_line_wins_for_each_player() {
        for player in [Player::Human, Player::Ai] {
            for expected in WinLine::all() {
                let mut board = Board::new();
                for pos in expected.cells() {
                    board.set(pos, Square::Occupied(player));
                }
                let line = check_win(&board, player).unwrap();
                assert_eq!(line, expected);
                assert_eq!(check_win(&board, player.opponent()), None);
            }
        }
    }

    #[test]
    fn test_simultaneous_lines_report_first_in_order() {
        // X holds both the top row (line 0) and the left column (line 3).
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::Human));
        }

        let line = check_win(&board, Player::Human).unwrap();
        assert_eq!(line.index(), 0);
    }
}
