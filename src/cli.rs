//! Command-line interface for perfect_tictactoe.

use clap::{Parser, Subcommand};
use perfect_tictactoe::OutputFormat;

/// Perfect Tic-Tac-Toe - exhaustive minimax engine
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Optimal tic-tac-toe moves by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Print JSON instead of text (overrides --format and the config file)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a board
    BestMove {
        /// Board as nine symbols in row-major order, e.g. "XO./.X./.O."
        board: String,

        /// Also print the value of every legal move
        #[arg(long)]
        analysis: bool,
    },

    /// Print the value of every legal move on a board
    Analyze {
        /// Board as nine symbols in row-major order
        board: String,
    },

    /// Let the engine play both sides until the game ends
    Play {
        /// Moves to play before the engine takes over (`row,col`, index or label)
        #[arg(long, num_args = 1..)]
        opening: Vec<String>,
    },
}
