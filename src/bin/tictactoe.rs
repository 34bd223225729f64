//! Tic-Tac-Toe engine CLI - batch driver for the exhaustive search core
//!
//! This binary provides a non-interactive interface for:
//! - Solving single positions for the optimal move
//! - Engine self-play and random-opponent evaluation
//! - Exhaustively verifying engine invariants over the reachable state space
//! - Exporting the optimal move table for downstream analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

use tictactoe::cli::commands::{export, selfplay, solve, verify};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive-search Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move for a position
    Solve(solve::SolveArgs),

    /// Play the engine against itself or a seeded random opponent
    Selfplay(selfplay::SelfplayArgs),

    /// Exhaustively check engine invariants over all reachable boards
    Verify(verify::VerifyArgs),

    /// Export the optimal move table for all reachable live positions
    Export(export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => solve::execute(args),
        Commands::Selfplay(args) => selfplay::execute(args),
        Commands::Verify(args) => verify::execute(args),
        Commands::Export(args) => export::execute(args),
    }
}
