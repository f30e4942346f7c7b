//! Session controller: turn order, computer replies and score keeping.
//!
//! The controller owns everything a play session mutates. The presentation
//! layer feeds it [`Input`] events, schedules the computer's reply when
//! handed a [`ComputerTurn`], and reads a [`SessionView`] back for display.

use super::action::Move;
use super::config::GameConfig;
use super::rules::{Outcome, evaluate};
use super::score::ScoreBoard;
use super::strategy::{Difficulty, Opponents, StrategyError};
use super::{Board, Cell, Position, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The human always plays X.
pub const HUMAN: Side = Side::X;
/// The computer always plays O.
pub const COMPUTER: Side = Side::O;

/// Whose input the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The human may select a cell.
    AwaitingHuman,
    /// A computer reply is scheduled; human input is ignored.
    AwaitingComputer,
    /// The round ended; only restart or new game do anything.
    RoundOver,
}

/// Input events from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// The human clicked a cell.
    SelectCell(Position),
    /// The difficulty selector changed.
    ChangeDifficulty(Difficulty),
    /// Clear the board, keep the score.
    Restart,
    /// Clear the board and the score.
    NewGame,
}

/// Ticket for a scheduled computer reply.
///
/// Issued when the human's move leaves the round open. Hand it back to
/// [`GameController::play_computer_turn`] once the think delay has passed.
/// Restart and new game invalidate outstanding tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "the computer only moves when the ticket is played"]
pub struct ComputerTurn {
    round: u64,
}

impl ComputerTurn {
    /// The round this ticket belongs to.
    pub fn round(&self) -> u64 {
        self.round
    }
}

/// Snapshot of everything the output sinks display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Cell contents in row-major order.
    pub cells: [Option<Side>; 9],
    /// Current turn state.
    pub state: TurnState,
    /// Active difficulty.
    pub difficulty: Difficulty,
    /// Session tallies.
    pub scores: ScoreBoard,
    /// Status or result message; empty while a round runs.
    pub message: String,
    /// Outcome of the current board.
    pub outcome: Outcome,
}

/// Drives one play session.
#[derive(Debug, Getters)]
pub struct GameController {
    board: Board,
    state: TurnState,
    difficulty: Difficulty,
    scores: ScoreBoard,
    message: String,
    history: Vec<Move>,
    round: u64,
    #[getter(skip)]
    opponents: Opponents,
}

impl GameController {
    /// Starts a session with OS-seeded opponents.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_opponents(difficulty, Opponents::from_os_rng())
    }

    /// Starts a session with reproducible opponents.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_opponents(difficulty, Opponents::seeded(seed))
    }

    /// Starts a session from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        match config.seed() {
            Some(seed) => Self::with_seed(*config.difficulty(), *seed),
            None => Self::new(*config.difficulty()),
        }
    }

    fn with_opponents(difficulty: Difficulty, opponents: Opponents) -> Self {
        info!(%difficulty, "Starting session");
        Self {
            board: Board::new(),
            state: TurnState::AwaitingHuman,
            difficulty,
            scores: ScoreBoard::new(),
            message: String::new(),
            history: Vec::new(),
            round: 0,
            opponents,
        }
    }

    /// Applies a presentation input event.
    ///
    /// Returns a ticket when the computer has to reply.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Option<ComputerTurn> {
        match input {
            Input::SelectCell(pos) => self.select_cell(pos),
            Input::ChangeDifficulty(difficulty) => {
                self.set_difficulty(difficulty);
                None
            }
            Input::Restart => {
                self.restart();
                None
            }
            Input::NewGame => {
                self.new_game();
                None
            }
        }
    }

    /// Plays the human's mark at `pos`.
    ///
    /// Ignored unless the controller is awaiting the human and the cell is
    /// empty. Returns a ticket when the round stays open.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn select_cell(&mut self, pos: Position) -> Option<ComputerTurn> {
        if self.state != TurnState::AwaitingHuman {
            debug!(state = ?self.state, "Ignoring selection outside the human's turn");
            return None;
        }
        if self.board.place(pos, HUMAN).is_err() {
            debug!(position = %pos, "Ignoring selection of an occupied cell");
            return None;
        }

        match self.apply(Move::new(HUMAN, pos)) {
            Outcome::Ongoing => {
                self.state = TurnState::AwaitingComputer;
                Some(ComputerTurn { round: self.round })
            }
            _ => None,
        }
    }

    /// Plays the computer's reply for a scheduled ticket.
    ///
    /// The difficulty is read now, not when the ticket was issued. Tickets
    /// from an earlier round, or arriving when no reply is due, are dropped
    /// and yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMove`] if the board is somehow full,
    /// or [`StrategyError::Rejected`] if the chosen cell is taken. The
    /// latter returns the turn to the human.
    #[instrument(skip(self), fields(round = self.round, difficulty = %self.difficulty))]
    pub fn play_computer_turn(&mut self, turn: ComputerTurn) -> Result<Option<Move>, StrategyError> {
        if turn.round != self.round || self.state != TurnState::AwaitingComputer {
            debug!(ticket_round = turn.round, state = ?self.state, "Dropping stale computer turn");
            return Ok(None);
        }

        let strategy = self.opponents.for_difficulty(self.difficulty);
        let pos = strategy.choose_move(&self.board, COMPUTER).inspect_err(|e| {
            warn!(error = %e, "Computer could not move");
        })?;
        self.place_reply(pos).map(Some)
    }

    /// Places the computer's chosen cell.
    ///
    /// A rejected placement hands the turn back to the human so the round
    /// can continue.
    fn place_reply(&mut self, pos: Position) -> Result<Move, StrategyError> {
        if let Err(e) = self.board.place(pos, COMPUTER) {
            warn!(error = %e, "Computer picked an occupied cell");
            self.state = TurnState::AwaitingHuman;
            return Err(e.into());
        }

        let action = Move::new(COMPUTER, pos);
        if self.apply(action) == Outcome::Ongoing {
            self.state = TurnState::AwaitingHuman;
        }
        Ok(action)
    }

    /// Records a placed move and settles the round if it ended.
    fn apply(&mut self, action: Move) -> Outcome {
        self.history.push(action);
        let outcome = evaluate(&self.board);
        info!(%action, ?outcome, "Move applied");

        if outcome.is_terminal() {
            self.state = TurnState::RoundOver;
            self.scores.record(outcome);
            self.message = outcome.to_string();
        }
        outcome
    }

    /// Changes the difficulty; takes effect on the next computer move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Clears the board for a new round, keeping the score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.history.clear();
        self.message.clear();
        self.state = TurnState::AwaitingHuman;
        self.round += 1;
        info!(round = self.round, "Round restarted");
    }

    /// Clears the board and zeroes the score.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.scores.reset();
        self.restart();
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Snapshot for display.
    pub fn view(&self) -> SessionView {
        SessionView {
            cells: self.board.cells().map(Cell::side),
            state: self.state,
            difficulty: self.difficulty,
            scores: self.scores,
            message: self.message.clone(),
            outcome: self.outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveError;

    #[test]
    fn test_select_cell_hands_turn_to_computer() {
        let mut game = GameController::with_seed(Difficulty::Easy, 1);
        let ticket = game.select_cell(Position::Center);
        assert!(ticket.is_some());
        assert_eq!(*game.state(), TurnState::AwaitingComputer);
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Side::X));
    }

    #[test]
    fn test_selection_ignored_while_computer_thinks() {
        let mut game = GameController::with_seed(Difficulty::Easy, 1);
        let _ticket = game.select_cell(Position::Center);
        let before = *game.board();
        assert!(game.select_cell(Position::TopLeft).is_none());
        assert_eq!(*game.board(), before);
        assert_eq!(*game.state(), TurnState::AwaitingComputer);
    }

    #[test]
    fn test_stale_ticket_after_restart_is_dropped() {
        let mut game = GameController::with_seed(Difficulty::Hard, 1);
        let stale = game.select_cell(Position::Center).unwrap();
        game.restart();
        let fresh = game.select_cell(Position::TopLeft).unwrap();

        assert_eq!(game.play_computer_turn(stale), Ok(None));
        assert_eq!(game.board().count(Side::O), 0);

        assert!(game.play_computer_turn(fresh).unwrap().is_some());
        assert_eq!(game.board().count(Side::O), 1);
    }

    #[test]
    fn test_ticket_cannot_be_played_twice() {
        let mut game = GameController::with_seed(Difficulty::Hard, 1);
        let ticket = game.select_cell(Position::Center).unwrap();
        assert!(game.play_computer_turn(ticket).unwrap().is_some());
        assert_eq!(game.play_computer_turn(ticket), Ok(None));
        assert_eq!(game.board().count(Side::O), 1);
    }

    #[test]
    fn test_rejected_reply_returns_turn_to_human() {
        let mut game = GameController::with_seed(Difficulty::Easy, 1);
        let _ticket = game.select_cell(Position::Center);
        let before = *game.board();

        let result = game.place_reply(Position::Center);
        assert_eq!(
            result,
            Err(StrategyError::Rejected(MoveError::CellOccupied(Position::Center)))
        );
        assert_eq!(*game.board(), before);
        assert_eq!(*game.state(), TurnState::AwaitingHuman);
        assert!(game.select_cell(Position::TopLeft).is_some());
    }

    #[test]
    fn test_view_reflects_board() {
        let mut game = GameController::with_seed(Difficulty::Easy, 1);
        let _ticket = game.select_cell(Position::BottomRight);
        let view = game.view();
        assert_eq!(view.cells[8], Some(Side::X));
        assert_eq!(view.cells[0], None);
        assert_eq!(view.state, TurnState::AwaitingComputer);
        assert_eq!(view.outcome, Outcome::Ongoing);
        assert!(view.message.is_empty());
    }
}
