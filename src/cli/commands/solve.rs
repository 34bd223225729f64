//! Optimal move analysis for a single position

use anyhow::{Result, bail};
use clap::Args;

use crate::{
    board::Board,
    search::{self, Direction},
};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Board as nine cell characters in row-major order ('.' for empty,
    /// e.g. "XOX.O....")
    #[arg(default_value = ".........")]
    pub board: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    if !board.is_valid() {
        bail!(
            "board '{}' cannot arise from alternating play",
            args.board.trim()
        );
    }

    println!("{board}");
    println!();

    if board.terminal() {
        println!(
            "Position is terminal: {} (utility {})",
            board.outcome(),
            board.utility()
        );
        return Ok(());
    }

    let player = board.player();
    let eval = search::evaluate(&board, Direction::for_player(player));
    let Some(best) = eval.best else {
        bail!("search produced no move for a live position");
    };

    println!("{player} to move");
    println!("Optimal move: {best} (value {})", eval.value);

    Ok(())
}
