//! Headless rounds for checking opponents against each other.

use anyhow::Result;
use tictac_core::{
    Difficulty, GameConfig, GameController, HUMAN, Opponents, Outcome, Position, Strategy,
    TurnState,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Plays `rounds` rounds with X driven by `x_strategy` and prints the final
/// session view as JSON on stdout.
///
/// With an `opening`, X plays that cell as the first move of every round.
#[instrument(skip(config))]
pub fn run(
    rounds: u32,
    config: &GameConfig,
    x_strategy: Difficulty,
    opening: Option<Position>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(rounds, o = %config.difficulty(), x = %x_strategy, "Starting simulation");

    let mut game = GameController::from_config(config);
    let mut x_side = match config.seed() {
        Some(seed) => Opponents::seeded(x_side_seed(*seed)),
        None => Opponents::from_os_rng(),
    };

    for round in 0..rounds {
        if round > 0 {
            game.restart();
        }
        let outcome = play_round(&mut game, x_side.for_difficulty(x_strategy), opening)?;
        debug!(round, %outcome, "Round finished");
    }

    info!(scores = ?game.scores(), "Simulation finished");
    println!("{}", serde_json::to_string_pretty(&game.view())?);
    Ok(())
}

/// Derives X's seed from the session seed.
///
/// O's opponents are seeded with `seed` itself. `31 * seed + 7` never equals
/// `seed` modulo 2^64, so the two sides never share a stream.
fn x_side_seed(seed: u64) -> u64 {
    const MULTIPLIER: u64 = 31;
    const OFFSET: u64 = 7;
    seed.wrapping_mul(MULTIPLIER).wrapping_add(OFFSET)
}

/// Plays until the round is over, replying for O immediately.
fn play_round(
    game: &mut GameController,
    x: &mut dyn Strategy,
    opening: Option<Position>,
) -> Result<Outcome> {
    while *game.state() == TurnState::AwaitingHuman {
        let pos = match opening {
            Some(pos) if game.history().is_empty() => pos,
            _ => x.choose_move(game.board(), HUMAN)?,
        };
        if let Some(turn) = game.select_cell(pos) {
            game.play_computer_turn(turn)?;
        }
    }
    Ok(game.outcome())
}
