//! Win-then-block opponent.

use super::{RandomPick, Strategy, StrategyError};
use crate::rules::WIN_LINES;
use crate::{Board, Cell, Position, Side};
use tracing::{debug, instrument};

/// Takes a winning cell if one exists, else blocks the opponent's,
/// else plays a random empty cell.
#[derive(Debug)]
pub struct Heuristic {
    fallback: RandomPick,
}

impl Heuristic {
    /// Creates a heuristic opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            fallback: RandomPick::new(),
        }
    }

    /// Creates a heuristic opponent with a reproducible fallback.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: RandomPick::seeded(seed),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

/// The open cell of the first line where `side` holds the other two.
pub fn completing_cell(board: &Board, side: Side) -> Option<Position> {
    WIN_LINES.iter().find_map(|line| {
        let held = line
            .iter()
            .filter(|&&pos| board.get(pos) == Cell::Occupied(side))
            .count();
        let open = line.iter().copied().find(|&pos| board.is_empty(pos));
        match (held, open) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

impl Strategy for Heuristic {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mover: Side) -> Result<Position, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMove);
        }

        if let Some(pos) = completing_cell(board, mover) {
            debug!(position = %pos, "Taking the win");
            return Ok(pos);
        }

        if let Some(pos) = completing_cell(board, mover.opponent()) {
            debug!(position = %pos, "Blocking");
            return Ok(pos);
        }

        self.fallback.choose_move(board, mover)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
