//! Tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of [`Cell`]s addressed by [`Position`]
//! - **Rules**: [`evaluate`] reports [`Outcome::Ongoing`], a win or a draw
//! - **Strategies**: [`Optimal`] minimax, [`Heuristic`] win-then-block and
//!   [`RandomPick`], selected through [`Difficulty`]
//! - **Controller**: [`GameController`] owns the board, turn order and
//!   [`ScoreBoard`] for one session
//!
//! # Example
//!
//! ```
//! use tictac_core::{Difficulty, GameController, Position, TurnState};
//!
//! let mut game = GameController::with_seed(Difficulty::Easy, 7);
//! if let Some(turn) = game.select_cell(Position::Center) {
//!     // A real frontend waits the think delay before this call.
//!     game.play_computer_turn(turn).expect("board has room");
//! }
//! assert_eq!(*game.state(), TurnState::AwaitingHuman);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod controller;
mod position;
pub mod rules;
mod score;
pub mod strategy;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, GameConfig};
pub use controller::{
    COMPUTER, ComputerTurn, GameController, HUMAN, Input, SessionView, TurnState,
};
pub use position::Position;
pub use rules::{Outcome, WIN_LINES, WinLine, evaluate};
pub use score::ScoreBoard;
pub use strategy::{
    Difficulty, Heuristic, Opponents, Optimal, RandomPick, Strategy, StrategyError,
};
pub use types::{Board, BoardParseError, Cell, Side};
