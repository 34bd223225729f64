//! Optimal policy export for every reachable live position

use std::{
    collections::{HashSet, VecDeque},
    fs::File,
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::ProgressBar;
use serde::Serialize;

use crate::{
    board::Board,
    search::{self, Direction},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportFormat {
    /// One row per position
    Csv,
    /// Pretty-printed array of entries
    Json,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
}

/// One live position with its optimal move and minimax value
#[derive(Debug, Serialize)]
pub struct PolicyEntry {
    pub board: String,
    pub to_move: char,
    pub value: i32,
    pub best_row: usize,
    pub best_col: usize,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let entries = policy_table()?;

    match args.format {
        ExportFormat::Csv => write_csv(&args.path, &entries)?,
        ExportFormat::Json => write_json(&args.path, &entries)?,
    }

    println!(
        "Exported {} positions to {}",
        entries.len(),
        args.path.display()
    );

    Ok(())
}

/// Compute the optimal move for every reachable live position.
///
/// Entries are sorted by board encoding so the output is deterministic.
pub fn policy_table() -> Result<Vec<PolicyEntry>> {
    let mut boards = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        if board.terminal() {
            continue;
        }
        boards.push(board);

        for mv in board.actions() {
            let child = board.result(mv)?;
            if visited.insert(child.encode()) {
                queue.push_back(child);
            }
        }
    }

    boards.sort_by_key(Board::encode);

    let progress = ProgressBar::new(boards.len() as u64);
    let mut entries = Vec::with_capacity(boards.len());

    for board in boards {
        let player = board.player();
        let eval = search::evaluate(&board, Direction::for_player(player));
        let best = eval
            .best
            .context("live position produced no move during export")?;

        entries.push(PolicyEntry {
            board: board.encode(),
            to_move: player.to_cell().to_char(),
            value: eval.value,
            best_row: best.row(),
            best_col: best.col(),
        });
        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(entries)
}

fn write_csv(path: &PathBuf, entries: &[PolicyEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create CSV file {}", path.display()))?;

    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    Ok(())
}

fn write_json(path: &PathBuf, entries: &[PolicyEntry]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create JSON file {}", path.display()))?;
    serde_json::to_writer_pretty(file, entries)?;

    Ok(())
}
