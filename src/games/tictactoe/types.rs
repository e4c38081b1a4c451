//! Core domain types for tic-tac-toe.

use super::position::Move;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed on the board by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first, maximizes utility).
    X,
    /// Player O (moves second, minimizes utility).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses a single board symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition returns a new board and
/// leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Creates a board from nested rows, `None` meaning an empty cell.
    pub fn from_rows(rows: [[Option<Mark>; 3]; 3]) -> Self {
        Self {
            cells: rows.map(|row| row.map(Cell::from)),
        }
    }

    /// Gets the cell targeted by a move, `None` if the move is off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the cell targeted by a move is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order, paired with its coordinate.
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.into_iter().map(move |mv| (mv, self.cells[mv.row][mv.col]))
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(mark))
            .count()
    }

    /// Returns a copy of this board with the given cell overwritten.
    ///
    /// The move must be on the board.
    pub(super) fn with_cell(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the starting board: every cell empty, X to move.
pub fn initial_state() -> Board {
    Board::new()
}

/// Formats the board as three rows separated by `-+-+-`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(f, "{}|{}|{}", row[0].symbol(), row[1].symbol(), row[2].symbol())?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character was neither a mark, an empty cell nor a separator.
    #[display("Invalid board symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset in the input.
        position: usize,
    },

    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
}

/// Parses nine cell symbols in row-major order.
///
/// `X`/`O` (any case) are marks, `.`, `_`, `-` and spaces are empty cells,
/// and `/`, `|`, `,` and newlines are ignored as row separators.
impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument(level = "debug")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for (position, symbol) in s.chars().enumerate() {
            match symbol {
                '/' | '|' | ',' | '\n' | '\r' => {}
                '.' | '_' | '-' | ' ' => cells.push(Cell::Empty),
                _ => match Mark::from_symbol(symbol) {
                    Some(mark) => cells.push(Cell::Occupied(mark)),
                    None => return Err(BoardParseError::InvalidSymbol { symbol, position }),
                },
            }
        }

        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount { found: cells.len() });
        }

        let board = Move::ALL
            .into_iter()
            .zip(cells)
            .fold(Board::new(), |board, (mv, cell)| board.with_cell(mv, cell));
        Ok(board)
    }
}
