//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use tictac_core::{Difficulty, Position};

/// Tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal as X
    Play {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "tictac.toml")]
        config: std::path::PathBuf,

        /// Starting difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for reproducible opponents
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play rounds headlessly with a computer-driven X and print the result as JSON
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Difficulty of the O opponent
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,

        /// Strategy driving X, named by difficulty label
        #[arg(short, long, default_value = "hard")]
        x_strategy: Difficulty,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Cell X opens every round with: index 0-8 or a label like "top-left"
        #[arg(long, value_parser = parse_position)]
        opening: Option<Position>,
    },
}

/// Parses a board cell from an index or a label.
fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell: use 0-8 or a label like \"center\"", s))
}
