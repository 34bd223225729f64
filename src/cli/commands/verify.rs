//! Exhaustive verification sweep over the reachable state space

use std::collections::{HashSet, VecDeque};

use anyhow::{Context, Result, bail, ensure};
use clap::Args;
use indicatif::ProgressBar;

use crate::{
    board::{Board, Outcome},
    search::{self, Direction},
};

/// Boards reachable from the empty board by alternating legal play
const REACHABLE_BOARDS: usize = 5478;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Also recompute the minimax value of every live position and check
    /// the chosen move achieves it (slower)
    #[arg(long)]
    pub full: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let progress = ProgressBar::new_spinner();

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    let mut total = 0usize;
    let mut live = 0usize;
    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    while let Some(board) = queue.pop_front() {
        total += 1;
        progress.inc(1);
        if total.is_multiple_of(512) {
            progress.set_message(format!("{total} boards checked"));
        }

        check_board(&board, args.full)?;

        if board.terminal() {
            match board.outcome() {
                Outcome::XWins => x_wins += 1,
                Outcome::OWins => o_wins += 1,
                Outcome::Draw => draws += 1,
                Outcome::InProgress => bail!("terminal board reported as in progress"),
            }
            continue;
        }

        live += 1;
        for mv in board.actions() {
            let child = board.result(mv)?;
            if visited.insert(child.encode()) {
                queue.push_back(child);
            }
        }
    }

    progress.finish_and_clear();

    ensure!(
        total == REACHABLE_BOARDS,
        "expected {REACHABLE_BOARDS} reachable boards, found {total}"
    );

    println!("All {total} reachable boards verified");
    println!("  live positions: {live}");
    println!(
        "  terminal positions: {} ({x_wins} X wins, {o_wins} O wins, {draws} draws)",
        total - live
    );

    Ok(())
}

fn check_board(board: &Board, full: bool) -> Result<()> {
    ensure!(
        board.is_valid(),
        "reached a board that fails validation: {}",
        board.encode()
    );

    if board.terminal() {
        let utility = board.utility();
        ensure!(
            (-1..=1).contains(&utility),
            "terminal board {} has utility {utility} outside [-1, 1]",
            board.encode()
        );
        ensure!(
            search::minimax(board).is_none(),
            "terminal board {} produced a move",
            board.encode()
        );
        return Ok(());
    }

    if full {
        let eval = search::evaluate(board, Direction::for_player(board.player()));
        ensure!(
            (-1..=1).contains(&eval.value),
            "live board {} has value {} outside [-1, 1]",
            board.encode(),
            eval.value
        );

        let best = eval
            .best
            .context("live position produced no move under full verification")?;
        let child = board.result(best)?;
        let confirm = search::evaluate(&child, Direction::for_player(child.player()));
        ensure!(
            confirm.value == eval.value,
            "board {}: chosen move {best} leads to value {} but the position is worth {}",
            board.encode(),
            confirm.value,
            eval.value
        );
    } else {
        let best = search::minimax(board).context("live position produced no move")?;
        ensure!(
            board.actions().contains(&best),
            "board {} chose illegal move {best}",
            board.encode()
        );
    }

    Ok(())
}
