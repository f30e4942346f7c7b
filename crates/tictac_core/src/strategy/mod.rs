//! Computer opponents.
//!
//! Each strategy picks an empty cell for the side to move. [`Opponents`]
//! holds one of each and hands out the one matching the current
//! [`Difficulty`].

mod heuristic;
mod optimal;
mod random;

pub use heuristic::Heuristic;
pub use optimal::{Optimal, minimax};
pub use random::RandomPick;

use super::{Board, MoveError, Position, Side};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Something that can choose a move for a side.
pub trait Strategy: std::fmt::Debug + Send {
    /// Chooses an empty cell for `mover` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMove`] when the board is full.
    fn choose_move(&mut self, board: &Board, mover: Side) -> Result<Position, StrategyError>;

    /// Short display name.
    fn name(&self) -> &'static str;
}

/// Errors from asking a strategy (or the controller) for a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StrategyError {
    /// The board has no empty cell.
    #[display("No legal move: the board is full")]
    NoLegalMove,
    /// The chosen move could not be applied.
    #[display("Move rejected: {}", _0)]
    Rejected(MoveError),
}

impl From<MoveError> for StrategyError {
    fn from(err: MoveError) -> Self {
        Self::Rejected(err)
    }
}

/// Selects which strategy drives the computer.
///
/// The labels are inherited as-is from the game this replaces: `Easy` plays
/// perfectly and `Hard` plays at random. That inversion looks like a labeling
/// bug upstream, but the mapping is kept until the intended ordering is
/// confirmed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Exhaustive minimax.
    #[default]
    Easy,
    /// Win, else block, else random.
    Medium,
    /// Uniformly random.
    Hard,
}

impl Difficulty {
    /// The next difficulty in menu order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

/// One instance of every strategy, keyed by [`Difficulty`].
#[derive(Debug)]
pub struct Opponents {
    optimal: Optimal,
    heuristic: Heuristic,
    random: RandomPick,
}

impl Opponents {
    /// Creates opponents seeded from the operating system.
    #[instrument]
    pub fn from_os_rng() -> Self {
        Self {
            optimal: Optimal,
            heuristic: Heuristic::new(),
            random: RandomPick::new(),
        }
    }

    /// Creates opponents with reproducible randomness.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            optimal: Optimal,
            heuristic: Heuristic::seeded(seed),
            random: RandomPick::seeded(seed.wrapping_add(1)),
        }
    }

    /// Returns the strategy for `difficulty`.
    pub fn for_difficulty(&mut self, difficulty: Difficulty) -> &mut dyn Strategy {
        let strategy: &mut dyn Strategy = match difficulty {
            Difficulty::Easy => &mut self.optimal,
            Difficulty::Medium => &mut self.heuristic,
            Difficulty::Hard => &mut self.random,
        };
        debug!(%difficulty, strategy = strategy.name(), "Resolved strategy");
        strategy
    }
}

impl Default for Opponents {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
