//! Engine self-play and random-opponent evaluation

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::{Rng, SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    board::{Board, Outcome, Player},
    game::Game,
    search,
};

#[derive(Args, Debug)]
pub struct SelfplayArgs {
    /// Starting position as nine cell characters in row-major order
    #[arg(long, default_value = ".........")]
    pub board: String,

    /// Play against a uniform random opponent instead of the engine itself
    #[arg(long)]
    pub random_opponent: bool,

    /// Number of games against the random opponent (the engine alternates
    /// marks between games)
    #[arg(long, default_value_t = 20)]
    pub games: usize,

    /// Seed for the random opponent
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let initial = Board::from_string(&args.board)?;
    if !initial.is_valid() {
        bail!(
            "board '{}' cannot arise from alternating play",
            args.board.trim()
        );
    }

    if args.random_opponent {
        run_random_trials(initial, args.games, args.seed)
    } else {
        run_optimal_trace(initial)
    }
}

/// Play one optimal-vs-optimal game, printing the trace.
///
/// The engine is deterministic, so a given starting position always
/// produces the same game; from the empty board it ends in a draw.
fn run_optimal_trace(initial: Board) -> Result<()> {
    let mut game = Game::from_board(initial);

    while !game.board().terminal() {
        let board = *game.board();
        let best = search::minimax(&board).context("search produced no move for a live position")?;
        println!("{} plays {}", board.player(), best);
        game.play(best)?;
    }

    println!();
    println!("{}", game.board());
    println!();
    println!("Outcome: {}", game.outcome());

    Ok(())
}

fn run_random_trials(initial: Board, games: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;

    for round in 0..games {
        let engine = if round % 2 == 0 { Player::X } else { Player::O };
        let outcome = play_against_random(&mut rng, initial, engine)?;

        match outcome {
            Outcome::Draw => draws += 1,
            Outcome::XWins if engine == Player::X => wins += 1,
            Outcome::OWins if engine == Player::O => wins += 1,
            Outcome::XWins | Outcome::OWins => losses += 1,
            Outcome::InProgress => bail!("game ended while still in progress"),
        }
    }

    println!("Engine record over {games} games: {wins} wins, {draws} draws, {losses} losses");

    if losses > 0 {
        bail!("engine lost {losses} of {games} games against a random opponent");
    }

    Ok(())
}

fn play_against_random<R: Rng>(rng: &mut R, initial: Board, engine: Player) -> Result<Outcome> {
    let mut game = Game::from_board(initial);

    while !game.board().terminal() {
        let board = *game.board();
        let chosen = if board.player() == engine {
            search::minimax(&board).context("search produced no move for a live position")?
        } else {
            *board
                .actions()
                .choose(rng)
                .context("live position has no open cells")?
        };
        game.play(chosen)?;
    }

    Ok(game.outcome())
}
