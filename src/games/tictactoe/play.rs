//! Driving whole games: replaying move lists and engine self-play.

use super::action::IllegalMove;
use super::rules::{Outcome, outcome, result, terminal};
use super::search::minimax;
use super::{Board, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A finished game played out by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Board the engine started from.
    start: Board,
    /// Moves played, in order.
    moves: Vec<Move>,
    /// Final (terminal) board.
    board: Board,
    /// How the game ended.
    outcome: Outcome,
}

/// Applies a sequence of moves to a board, alternating players.
///
/// # Errors
///
/// Returns the first `IllegalMove` encountered, including
/// `IllegalMove::GameOver` for a move made after the game has ended.
#[instrument(skip(start, moves), fields(move_count = moves.len()))]
pub fn replay(start: Board, moves: &[Move]) -> Result<Board, IllegalMove> {
    moves.iter().try_fold(start, |board, mv| {
        if terminal(&board) {
            return Err(IllegalMove::GameOver {
                row: mv.row,
                col: mv.col,
            });
        }
        result(&board, *mv)
    })
}

/// Plays the game out from `start`, letting the engine choose every move.
///
/// # Errors
///
/// Returns `IllegalMove` if the engine ever proposes an unplayable move.
#[instrument(skip(start))]
pub fn self_play(start: Board) -> Result<GameRecord, IllegalMove> {
    let mut board = start;
    let mut moves = Vec::new();

    while let Some(mv) = minimax(&board) {
        board = result(&board, mv)?;
        debug!(%mv, label = mv.label(), "Engine played");
        moves.push(mv);
    }

    let outcome = outcome(&board).unwrap_or(Outcome::Draw);
    info!(%outcome, moves = moves.len(), "Self-play finished");
    Ok(GameRecord {
        start,
        moves,
        board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_replay_alternates_marks() {
        let moves = [Move::new(1, 1), Move::new(0, 0), Move::new(2, 2)];
        let board = replay(Board::new(), &moves).unwrap();
        assert_eq!(board, "O../.X./..X".parse::<Board>().unwrap());
    }

    #[test]
    fn test_replay_stops_on_illegal_move() {
        let moves = [Move::new(1, 1), Move::new(1, 1)];
        assert_eq!(
            replay(Board::new(), &moves),
            Err(IllegalMove::Occupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_replay_rejects_moves_after_win() {
        // X completes the top row on the fifth move; O's sixth move must fail.
        let moves = [
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(0, 2),
            Move::new(2, 2),
        ];
        let err = replay(Board::new(), &moves).unwrap_err();
        assert_eq!(err, IllegalMove::GameOver { row: 2, col: 2 });
        assert_eq!(err.attempted(), Move::new(2, 2));

        let won = replay(Board::new(), &moves[..5]).unwrap();
        assert_eq!(won, "XXX/OO./...".parse::<Board>().unwrap());
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let record = self_play(Board::new()).unwrap();
        assert_eq!(*record.outcome(), Outcome::Draw);
        assert_eq!(record.moves().len(), 9);
        assert_eq!(record.moves()[0], Move::new(0, 0));
    }

    #[test]
    fn test_self_play_converts_winning_position() {
        let start: Board = "XO./.X./.O.".parse().unwrap();
        let record = self_play(start).unwrap();
        assert_eq!(*record.outcome(), Outcome::Winner(Mark::X));
        assert_eq!(*record.start(), start);
    }

    #[test]
    fn test_self_play_on_finished_board() {
        let start: Board = "XXX/OO./...".parse().unwrap();
        let record = self_play(start).unwrap();
        assert!(record.moves().is_empty());
        assert_eq!(*record.board(), start);
        assert_eq!(*record.outcome(), Outcome::Winner(Mark::X));
    }
}
