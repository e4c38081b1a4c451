//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards. Rules are kept apart from board storage so
//! the search and any game loop can compose them freely.

pub mod draw;
pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{actions, result, successors};
pub use terminal::{Outcome, outcome, terminal, utility};
pub use turn::player;
pub use win::winner;
