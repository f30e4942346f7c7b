//! Exhaustive minimax opponent.

use super::{Strategy, StrategyError};
use crate::rules::{Outcome, evaluate};
use crate::{Board, Position, Side};
use tracing::{debug, instrument};

/// Score of a board X has won. O wins score the negation, draws zero.
const WIN_SCORE: i32 = 10;

/// Searches the whole remaining game tree.
///
/// Scores are always X-oriented: X maximises, O minimises, whichever side
/// is asking. Ties go to the lowest cell index.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimal;

/// Minimax value of `board` with `to_move` next, from X's point of view.
///
/// Each ply works on its own copy of the board, so no undo step is needed.
pub fn minimax(board: Board, to_move: Side) -> i32 {
    match evaluate(&board) {
        Outcome::Win(Side::X) => return WIN_SCORE,
        Outcome::Win(Side::O) => return -WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::Ongoing => {}
    }

    let children = Position::ALL
        .iter()
        .filter_map(|&pos| board.with_move(pos, to_move).ok())
        .map(|next| minimax(next, to_move.opponent()));

    let best = match to_move {
        Side::X => children.max(),
        Side::O => children.min(),
    };
    // Ongoing guarantees at least one child.
    best.unwrap_or(0)
}

impl Strategy for Optimal {
    #[instrument(skip(self, board), fields(board = %board.display()))]
    fn choose_move(&mut self, board: &Board, mover: Side) -> Result<Position, StrategyError> {
        let mut best: Option<(Position, i32)> = None;

        for pos in board.empty_positions() {
            let score = minimax(board.with_move(pos, mover)?, mover.opponent());
            let improves = match best {
                None => true,
                Some((_, best_score)) => match mover {
                    Side::X => score > best_score,
                    Side::O => score < best_score,
                },
            };
            if improves {
                best = Some((pos, score));
            }
        }

        let (pos, score) = best.ok_or(StrategyError::NoLegalMove)?;
        debug!(position = %pos, score, "Minimax chose move");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}
