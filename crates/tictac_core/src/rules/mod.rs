//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`] snapshot. Nothing here mutates state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, holds_line, winner};

use super::{Board, Side};
use serde::{Deserialize, Serialize};

/// Result of inspecting a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    Ongoing,
    /// A side completed a line.
    Win(Side),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the round has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Win(side) => write!(f, "{} wins!", side),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Evaluates a board.
///
/// The first completed line in [`WIN_LINES`] order decides the winner; a
/// full board without one is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = winner(board) {
        Outcome::Win(side)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_win_beats_full_board() {
        // Full board where X completes the left column.
        let board: Board = "XOXXOOXXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Side::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_first_line_in_table_order_wins() {
        // Not reachable in play: both the top row (O) and bottom row (X) are complete.
        let board: Board = "OOO___XXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Side::O));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win(Side::X).to_string(), "X wins!");
        assert_eq!(Outcome::Draw.to_string(), "Draw!");
    }
}
