//! tictac - terminal tic-tac-toe against a computer opponent.

#![warn(missing_docs)]

mod cli;
mod simulate;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictac_core::GameConfig;
use tracing::instrument;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            delay_ms,
            seed,
        } => {
            let config = load_config(&config, difficulty, delay_ms, seed)?;
            tui::run_tui(config).await
        }
        Command::Simulate {
            rounds,
            difficulty,
            x_strategy,
            seed,
            opening,
        } => {
            let mut config = GameConfig::default()
                .with_difficulty(difficulty)
                .with_think_delay_ms(0);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            simulate::run(rounds, &config, x_strategy, opening)
        }
    }
}

/// Reads the config file and applies command-line overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &std::path::Path,
    difficulty: Option<tictac_core::Difficulty>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(path)?;

    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_think_delay_ms(delay_ms);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}
