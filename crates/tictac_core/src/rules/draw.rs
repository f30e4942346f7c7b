//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
