//! Tic-tac-toe: board model, rules and perfect-play search.

mod action;
mod play;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::IllegalMove;
pub use play::{GameRecord, replay, self_play};
pub use position::{Move, MoveParseError};
pub use rules::{Outcome, actions, outcome, player, result, terminal, utility, winner};
pub use search::{MoveEvaluation, Score, analyze, evaluate, minimax};
pub use types::{Board, BoardParseError, Cell, Mark, initial_state};
