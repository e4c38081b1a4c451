//! Turn inference.

use super::super::{Board, Mark};
use tracing::instrument;

/// Returns the mark whose turn it is.
///
/// X moves first, so equal counts mean X is to move; otherwise O is.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&Board::new()), Mark::X);
    }

    #[test]
    fn test_o_moves_after_x() {
        let board: Board = ".../.X./...".parse().unwrap();
        assert_eq!(player(&board), Mark::O);
    }

    #[test]
    fn test_x_moves_after_equal_counts() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(player(&board), Mark::X);
    }
}
