//! Command-line interface for the terminal board.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Play tic-tac-toe on a square board in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with the board size and player roster
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length, at most 32 (overrides the config file)
    #[arg(short, long)]
    pub board_size: Option<usize>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
