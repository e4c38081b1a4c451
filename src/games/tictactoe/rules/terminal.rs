//! Terminal test, utility and final outcome.

use super::super::{Board, Mark};
use super::draw::is_full;
use super::win::winner;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Checks if the game is over: a line is complete or no empty cell remains.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a finished board: `1` if X won, `-1` if O won, `0` otherwise.
///
/// Only meaningful on terminal boards; elsewhere it reports `0` unless a
/// line is already complete.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Mark),
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns the outcome of the game, or `None` while it is still in progress.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(mark) => Some(Outcome::Winner(mark)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
