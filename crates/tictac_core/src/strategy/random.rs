//! Uniformly random opponent.

use super::{Strategy, StrategyError};
use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks any empty cell with equal probability.
#[derive(Debug)]
pub struct RandomPick {
    rng: StdRng,
}

impl RandomPick {
    /// Creates a random opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a random opponent with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPick {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomPick {
    fn choose_move(&mut self, board: &Board, _mover: Side) -> Result<Position, StrategyError> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(StrategyError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..open.len());
        Ok(open[idx])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_every_open_cell_and_nothing_else() {
        let board: Board = "XO_OX_XO_".parse().unwrap();
        let mut random = RandomPick::seeded(42);
        let mut hits = [0usize; 9];

        for _ in 0..600 {
            let pos = random.choose_move(&board, Side::O).unwrap();
            hits[pos.to_index()] += 1;
        }

        for pos in Position::ALL {
            if board.is_empty(pos) {
                assert!(hits[pos.to_index()] > 0, "{pos} never chosen");
            } else {
                assert_eq!(hits[pos.to_index()], 0, "{pos} is occupied");
            }
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(
            RandomPick::seeded(0).choose_move(&board, Side::O),
            Err(StrategyError::NoLegalMove)
        );
    }
}
