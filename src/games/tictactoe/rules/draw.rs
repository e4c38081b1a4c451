//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| !cell.is_empty())
}

/// Checks if the game ended in a draw: full board, no line.
#[instrument(level = "trace", skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
