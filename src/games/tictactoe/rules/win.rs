//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Move};
use tracing::instrument;

/// Every winning line, checked in this order: rows, columns, diagonals.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move { row: 0, col: 0 }, Move { row: 0, col: 1 }, Move { row: 0, col: 2 }],
    [Move { row: 1, col: 0 }, Move { row: 1, col: 1 }, Move { row: 1, col: 2 }],
    [Move { row: 2, col: 0 }, Move { row: 2, col: 1 }, Move { row: 2, col: 2 }],
    // Columns
    [Move { row: 0, col: 0 }, Move { row: 1, col: 0 }, Move { row: 2, col: 0 }],
    [Move { row: 0, col: 1 }, Move { row: 1, col: 1 }, Move { row: 2, col: 1 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 2 }, Move { row: 2, col: 2 }],
    // Diagonals
    [Move { row: 0, col: 0 }, Move { row: 1, col: 1 }, Move { row: 2, col: 2 }],
    [Move { row: 0, col: 2 }, Move { row: 1, col: 1 }, Move { row: 2, col: 0 }],
];

/// Returns the mark that fills a complete line, if any.
///
/// On a malformed board with several complete lines the first one in
/// [`LINES`] order is reported.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        match (board.get(a), board.get(b), board.get(c)) {
            (Some(Cell::Occupied(first)), Some(second), Some(third))
                if second == Cell::Occupied(first) && third == Cell::Occupied(first) =>
            {
                return Some(first);
            }
            _ => {}
        }
    }

    None
}
