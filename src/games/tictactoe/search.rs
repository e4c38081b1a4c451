//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every line of play is searched
//! to the end of the game; the only cutoff is returning early once a side
//! has found the best possible score for itself (`+1` for X, `-1` for O).
//!
//! Ties keep the first move found in row-major order.

use super::rules::{player, successors, terminal, utility};
use super::{Board, Mark, Move};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Game-theoretic value of a board: `1` X wins, `-1` O wins, `0` draw.
pub type Score = i8;

/// Best score X can hope for.
const X_WINS: Score = 1;
/// Best score O can hope for.
const O_WINS: Score = -1;

/// A legal move paired with the value of the position it leads to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Getters,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct MoveEvaluation {
    /// The move.
    action: Move,
    /// Value of the resulting board under optimal play.
    value: Score,
}

/// State of a single search call.
#[derive(Debug, Default)]
struct Search {
    nodes: u64,
}

impl Search {
    /// Dispatches to the maximizer or minimizer for the side to move.
    fn best(&mut self, board: &Board) -> (Score, Option<Move>) {
        match player(board) {
            Mark::X => self.max_value(board),
            Mark::O => self.min_value(board),
        }
    }

    fn max_value(&mut self, board: &Board) -> (Score, Option<Move>) {
        self.nodes += 1;
        if terminal(board) {
            return (utility(board), None);
        }

        let mut best = Score::MIN;
        let mut best_move = None;
        for (mv, next) in successors(board) {
            let (value, _) = self.min_value(&next);
            if value > best {
                best = value;
                best_move = Some(mv);
                if best == X_WINS {
                    break;
                }
            }
        }
        (best, best_move)
    }

    fn min_value(&mut self, board: &Board) -> (Score, Option<Move>) {
        self.nodes += 1;
        if terminal(board) {
            return (utility(board), None);
        }

        let mut best = Score::MAX;
        let mut best_move = None;
        for (mv, next) in successors(board) {
            let (value, _) = self.max_value(&next);
            if value < best {
                best = value;
                best_move = Some(mv);
                if best == O_WINS {
                    break;
                }
            }
        }
        (best, best_move)
    }
}

/// Returns the optimal move for the player to move, or `None` if the game
/// is already over.
#[instrument(skip(board), fields(to_move = %player(board)))]
pub fn minimax(board: &Board) -> Option<Move> {
    if terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }

    let mut search = Search::default();
    let (value, best) = search.best(board);
    debug!(?best, value, nodes = search.nodes, "Search complete");
    best
}

/// Returns the value of the board under optimal play by both sides.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Score {
    let mut search = Search::default();
    let (value, _) = search.best(board);
    debug!(value, nodes = search.nodes, "Evaluation complete");
    value
}

/// Scores every legal move, in row-major order.
///
/// Returns an empty list on terminal boards.
#[instrument(skip(board))]
pub fn analyze(board: &Board) -> Vec<MoveEvaluation> {
    if terminal(board) {
        return Vec::new();
    }

    let mut search = Search::default();
    let evaluations: Vec<_> = successors(board)
        .map(|(mv, next)| MoveEvaluation::new(mv, search.best(&next).0))
        .collect();
    debug!(moves = evaluations.len(), nodes = search.nodes, "Analysis complete");
    evaluations
}
