//! First-class move types.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Error applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}
