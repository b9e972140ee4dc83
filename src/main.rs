//! Tic-tac-toe with time travel, in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_rewind::{Cli, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    tui::run(cli)
}
