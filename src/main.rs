//! Perfect Tic-Tac-Toe - command-line driver
//!
//! Asks the engine for moves, analyses positions and plays whole games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use perfect_tictactoe::{
    Board, GameRecord, Move, MoveEvaluation, OutputFormat, PlayConfig, analyze, initial_state,
    minimax, outcome, player, replay, self_play,
};
use serde_json::json;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let file_config = load_config(&cli)?;

    match cli.command {
        Command::BestMove { board, analysis } => {
            let config = file_config.merge_cli(cli.json, cli.format, Vec::new());
            debug!(?config, "Effective configuration");
            let show_analysis = analysis || *config.show_analysis();
            run_best_move(&board, show_analysis, *config.format())
        }
        Command::Analyze { board } => {
            let config = file_config.merge_cli(cli.json, cli.format, Vec::new());
            debug!(?config, "Effective configuration");
            run_analyze(&board, *config.format())
        }
        Command::Play { opening } => {
            let config = file_config.merge_cli(cli.json, cli.format, opening);
            debug!(?config, "Effective configuration");
            run_play(config.opening(), *config.format())
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Reads the config file, if any.
#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<PlayConfig> {
    Ok(match &cli.config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    })
}

fn parse_board(board: &str) -> Result<Board> {
    board
        .parse::<Board>()
        .with_context(|| format!("Invalid board {:?}", board))
}

/// Prints the engine's move for a board.
#[instrument(skip(format))]
fn run_best_move(board: &str, show_analysis: bool, format: OutputFormat) -> Result<()> {
    let board = parse_board(board)?;
    let best = minimax(&board);
    let evaluations = if show_analysis { analyze(&board) } else { Vec::new() };
    info!(?best, "Best move computed");

    match format {
        OutputFormat::Json => {
            let doc = json!({
                "board": board,
                "to_move": player(&board),
                "best_move": best,
                "outcome": outcome(&board),
                "analysis": evaluations,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Text => {
            println!("{}\n", board);
            match best {
                Some(mv) => println!("{} to move: {} {}", player(&board), mv.label(), mv),
                None => println!(
                    "Game over: {}",
                    outcome(&board).map_or_else(|| "unknown".to_string(), |o| o.to_string())
                ),
            }
            print_evaluations(&evaluations);
        }
    }
    Ok(())
}

/// Prints every legal move with its value.
#[instrument(skip(format))]
fn run_analyze(board: &str, format: OutputFormat) -> Result<()> {
    let board = parse_board(board)?;
    let evaluations = analyze(&board);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluations)?),
        OutputFormat::Text => {
            println!("{}\n", board);
            if evaluations.is_empty() {
                println!("No legal moves");
            }
            print_evaluations(&evaluations);
        }
    }
    Ok(())
}

/// Plays the opening, then lets the engine finish the game.
#[instrument(skip(format))]
fn run_play(opening: &[String], format: OutputFormat) -> Result<()> {
    let opening = opening
        .iter()
        .map(|s| s.parse::<Move>())
        .collect::<Result<Vec<_>, _>>()?;
    let start = replay(initial_state(), &opening).context("Opening is not playable")?;
    let record = self_play(start)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => print_record(&record)?,
    }
    Ok(())
}

fn print_record(record: &GameRecord) -> Result<()> {
    println!("{}\n", record.start());
    let mut board = *record.start();
    for mv in record.moves() {
        let mark = player(&board);
        board = perfect_tictactoe::result(&board, *mv)?;
        println!("{} plays {} {}", mark, mv.label(), mv);
        println!("{}\n", board);
    }
    println!("{}", record.outcome());
    Ok(())
}

fn print_evaluations(evaluations: &[MoveEvaluation]) {
    for evaluation in evaluations {
        let verdict = match *evaluation.value() {
            1 => "X wins",
            -1 => "O wins",
            _ => "draw",
        };
        println!(
            "  {:<14} {} -> {:+} ({})",
            evaluation.action().label(),
            evaluation.action(),
            evaluation.value(),
            verdict
        );
    }
}
