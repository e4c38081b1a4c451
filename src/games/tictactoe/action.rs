//! Errors raised when applying a move.

use super::position::Move;
use derive_more::{Display, Error};

/// A move that cannot be applied to the board.
///
/// This is a caller-contract violation: it is reported, never corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The coordinates fall outside the 3x3 board.
    #[display("Move ({row}, {col}) is out of range (must be 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game was already over when the move was attempted.
    #[display("Move ({row}, {col}) played after the game ended")]
    GameOver {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl IllegalMove {
    /// Returns the move that was rejected.
    pub fn attempted(&self) -> Move {
        match *self {
            IllegalMove::OutOfRange { row, col }
            | IllegalMove::Occupied { row, col }
            | IllegalMove::GameOver { row, col } => Move::new(row, col),
        }
    }
}
