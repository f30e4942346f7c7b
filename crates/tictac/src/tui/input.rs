//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictac_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let idx = cursor.to_index();
    let (row, col) = (idx / 3, idx % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
