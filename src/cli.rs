//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Two-player tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File receiving log output (the terminal itself is taken over by the UI)
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,
}
