//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A side in the game.
///
/// X is always the human mover and O the computer for the whole session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Side {
    /// Side X (the human, moves first).
    X,
    /// Side O (the computer).
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a side.
    Occupied(Side),
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from empty to occupied; the one way back is
/// [`Board::clear`], which empties all nine at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places a mark for `side` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, pos: Position, side: Side) -> Result<(), MoveError> {
        let cell = &mut self.cells[pos.to_index()];
        if *cell != Cell::Empty {
            return Err(MoveError::CellOccupied(pos));
        }
        *cell = Cell::Occupied(side);
        Ok(())
    }

    /// Returns a copy of this board with `side` placed at `pos`.
    pub(crate) fn with_move(mut self, pos: Position, side: Side) -> Result<Self, MoveError> {
        self.place(pos, side)?;
        Ok(self)
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of cells held by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(side) => side.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Input did not have exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// Input contained a character that is not a mark or an empty marker.
    #[display("Unexpected character {:?} at cell {}", ch, index)]
    BadCell {
        /// The offending character.
        ch: char,
        /// Its cell index.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine characters in row-major order: `X`, `O`, or one of
    /// `_ . -` and space for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }
        let mut cells = [Cell::Empty; 9];
        for (index, ch) in chars.into_iter().enumerate() {
            cells[index] = match ch {
                'X' | 'x' => Cell::Occupied(Side::X),
                'O' | 'o' => Cell::Occupied(Side::O),
                '_' | '.' | '-' | ' ' => Cell::Empty,
                ch => return Err(BoardParseError::BadCell { ch, index }),
            };
        }
        Ok(Self::from_cells(cells))
    }
}
