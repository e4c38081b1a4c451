//! Legal-move enumeration and the board transition.

use super::super::action::IllegalMove;
use super::super::{Board, Cell, Move};
use super::turn::player;
use tracing::instrument;

/// Returns every move targeting an empty cell, in row-major order.
///
/// A full board yields no moves.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Move> {
    Move::ALL
        .into_iter()
        .filter(|mv| board.is_empty(*mv))
        .collect()
}

/// Returns the board that results from the player to move marking `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns `IllegalMove::OutOfRange` if the move is off the board and
/// `IllegalMove::Occupied` if the target cell already holds a mark.
#[instrument(level = "trace", skip(board), fields(row = mv.row, col = mv.col))]
pub fn result(board: &Board, mv: Move) -> Result<Board, IllegalMove> {
    match board.get(mv) {
        None => Err(IllegalMove::OutOfRange {
            row: mv.row,
            col: mv.col,
        }),
        Some(Cell::Occupied(_)) => Err(IllegalMove::Occupied {
            row: mv.row,
            col: mv.col,
        }),
        Some(Cell::Empty) => Ok(board.with_cell(mv, Cell::Occupied(player(board)))),
    }
}

/// Pairs each legal move with the board it produces, in row-major order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mark = player(board);
    Move::ALL
        .into_iter()
        .filter(|mv| board.is_empty(*mv))
        .map(move |mv| (mv, board.with_cell(mv, Cell::Occupied(mark))))
}
