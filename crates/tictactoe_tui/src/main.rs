//! TicTacToe - two players take turns marking a 3x3 grid.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{init_tracing, run, Cli};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_tracing(&settings)?;

    run(&settings)
}
