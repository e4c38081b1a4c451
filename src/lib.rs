//! Perfect-play tic-tac-toe.
//!
//! A pure, value-semantic model of the 3x3 game plus an exhaustive minimax
//! search that always finds an optimal move.
//!
//! # Architecture
//!
//! - **Board model**: `Board`, `Cell`, `Mark` and `Move` are `Copy` values;
//!   every transition returns a new board.
//! - **Rules**: turn inference, legal moves, transitions, win and terminal
//!   detection, utility.
//! - **Search**: `minimax` chooses the move, `evaluate` and `analyze` report
//!   game-theoretic values.
//! - **Play**: replaying move lists and engine self-play.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! # fn example() -> Result<(), perfect_tictactoe::IllegalMove> {
//! let mut board = initial_state();
//! while let Some(mv) = minimax(&board) {
//!     board = result(&board, mv)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, OutputFormat, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Cell, GameRecord, IllegalMove, Mark, Move, MoveEvaluation,
    MoveParseError, Outcome, Score, actions, analyze, evaluate, initial_state, minimax, outcome,
    player, replay, result, self_play, terminal, utility, winner,
};

// Crate-level exports - Rule helpers
pub use games::tictactoe::rules::{is_draw, is_full, successors, win::LINES};
