//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Position, Side};
use strum::IntoEnumIterator;

/// Three positions that win when held by one side.
pub type WinLine = [Position; 3];

/// The eight winning lines: rows, then columns, then diagonals.
///
/// Order matters: scans that stop at the first match rely on it.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the side holding the first complete line in [`WIN_LINES`] order.
pub fn winner(board: &Board) -> Option<Side> {
    WIN_LINES
        .iter()
        .find_map(|line| Side::iter().find(|&side| holds_line(board, side, line)))
}

/// Whether `side` holds all three cells of `line`.
pub fn holds_line(board: &Board, side: Side, line: &WinLine) -> bool {
    line.iter().all(|&pos| board.get(pos) == Cell::Occupied(side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX______".parse().unwrap();
        assert_eq!(winner(&board), Some(Side::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "__O_O_O__".parse().unwrap();
        assert_eq!(winner(&board), Some(Side::O));
        assert!(holds_line(&board, Side::O, &WIN_LINES[7]));
        assert!(!holds_line(&board, Side::X, &WIN_LINES[7]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(winner(&board), None);
    }
}
