//! Application state: the session controller plus cursor and scheduling.

use super::input::move_cursor;
use anyhow::Result;
use crossterm::event::KeyCode;
use tictac_core::{ComputerTurn, GameConfig, GameController, Input, Position};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameController,
    cursor: Position,
    think_delay: Duration,
    turn_tx: mpsc::UnboundedSender<ComputerTurn>,
}

impl App {
    /// Creates the app for a fresh session.
    pub fn new(config: &GameConfig, turn_tx: mpsc::UnboundedSender<ComputerTurn>) -> Self {
        Self {
            game: GameController::from_config(config),
            cursor: Position::Center,
            think_delay: config.think_delay(),
            turn_tx,
        }
    }

    /// The session being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Maps a key to a game input.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let input = match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                return Control::Continue;
            }
            KeyCode::Enter | KeyCode::Char(' ') => Input::SelectCell(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_index(d as usize - 1))
                else {
                    return Control::Continue;
                };
                self.cursor = pos;
                Input::SelectCell(pos)
            }
            KeyCode::Char('d') => Input::ChangeDifficulty(self.game.difficulty().cycle()),
            KeyCode::Char('r') => Input::Restart,
            KeyCode::Char('n') => Input::NewGame,
            _ => return Control::Continue,
        };

        if let Some(turn) = self.game.handle(input) {
            self.schedule(turn);
        }
        Control::Continue
    }

    /// Delivers `turn` back to the event loop after the think delay.
    fn schedule(&self, turn: ComputerTurn) {
        let tx = self.turn_tx.clone();
        let delay = self.think_delay;
        debug!(round = turn.round(), ?delay, "Scheduling computer turn");
        tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(turn).is_err() {
                debug!("Event loop gone before computer turn");
            }
        });
    }

    /// Applies a computer turn whose delay has elapsed.
    pub fn play_computer_turn(&mut self, turn: ComputerTurn) -> Result<()> {
        if let Some(reply) = self.game.play_computer_turn(turn)? {
            debug!(%reply, "Computer moved");
        }
        Ok(())
    }
}
