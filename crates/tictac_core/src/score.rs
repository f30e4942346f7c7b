//! Session tallies.

use super::Side;
use super::rules::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win and draw counts across the rounds of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Rounds X won.
    x_wins: u32,
    /// Rounds O won.
    o_wins: u32,
    /// Rounds that ended full with no line.
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round. Returns false (and changes nothing) for
    /// [`Outcome::Ongoing`].
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Win(Side::X) => self.x_wins += 1,
            Outcome::Win(Side::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => return false,
        }
        info!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Score updated");
        true
    }

    /// Zeroes every count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total rounds counted.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Wins for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_outcome_bumps_one_count() {
        let mut scores = ScoreBoard::new();
        assert!(scores.record(Outcome::Win(Side::X)));
        assert!(scores.record(Outcome::Draw));
        assert!(scores.record(Outcome::Win(Side::O)));
        assert!(scores.record(Outcome::Win(Side::O)));
        assert_eq!(*scores.x_wins(), 1);
        assert_eq!(scores.wins(Side::O), 2);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.rounds(), 4);
    }

    #[test]
    fn test_ongoing_is_not_counted() {
        let mut scores = ScoreBoard::new();
        assert!(!scores.record(Outcome::Ongoing));
        assert_eq!(scores, ScoreBoard::new());
    }

    #[test]
    fn test_reset_zeroes() {
        let mut scores = ScoreBoard::new();
        scores.record(Outcome::Draw);
        scores.reset();
        assert_eq!(scores.rounds(), 0);
    }
}
