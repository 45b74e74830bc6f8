//! Xiangqi self-play - pits the minimax search against itself.
//!
//! Plays one game from the initial position, prints the final board and the
//! result, and optionally verifies that undoing every move restores the
//! starting layout.

mod config;
mod runner;

use anyhow::ensure;
use clap::Parser;
use config::SelfPlayConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use runner::{Outcome, SelfPlayRunner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use xiangqi_core::Side;
use xiangqi_engine::Grid;

/// Xiangqi self-play - plays the minimax search against itself.
#[derive(Parser)]
#[command(name = "xiangqi-selfplay")]
#[command(about = "Plays the minimax search against itself")]
struct Args {
    /// Path to a TOML config file (defaults to selfplay.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth for both sides
    #[arg(long)]
    depth: Option<u32>,

    /// Search depth for Red
    #[arg(long)]
    red_depth: Option<u32>,

    /// Search depth for Black
    #[arg(long)]
    black_depth: Option<u32>,

    /// Disable alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Number of random opening plies
    #[arg(long)]
    random_plies: Option<u32>,

    /// Seed for the random opening
    #[arg(long)]
    seed: Option<u64>,

    /// Undo the whole game at the end and check the starting layout comes back
    #[arg(long)]
    undo_check: bool,
}

impl Args {
    /// Applies command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut SelfPlayConfig) {
        if let Some(depth) = self.depth {
            config.red.depth = depth;
            config.black.depth = depth;
        }
        if let Some(depth) = self.red_depth {
            config.red.depth = depth;
        }
        if let Some(depth) = self.black_depth {
            config.black.depth = depth;
        }
        if self.no_pruning {
            config.red.pruning = false;
            config.black.pruning = false;
        }
        if let Some(max_plies) = self.max_plies {
            config.max_plies = max_plies;
        }
        if let Some(plies) = self.random_plies {
            config.random_opening_plies = plies;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut config = SelfPlayConfig::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    for side in Side::ALL {
        tracing::info!("{}: {:?}", side, config.search_for(side));
    }
    tracing::info!("Max plies: {}", config.max_plies);
    tracing::info!("Random opening plies: {} (seed {})", config.random_opening_plies, seed);

    let mut runner = SelfPlayRunner::new(config, StdRng::seed_from_u64(seed));
    let mut game = runner.play_game()?;

    println!("{}", Grid::build(&game.pieces));
    match game.outcome {
        Outcome::Finished(result) => println!("{} after {} plies", result, game.history.len()),
        Outcome::MoveLimit => println!("No result after {} plies", game.history.len()),
    }

    if args.undo_check {
        let plies = game.history.len();
        ensure!(
            game.unwind(),
            "undoing {} plies did not restore the initial layout",
            plies
        );
        tracing::info!("Undo check passed for {} plies", plies);
    }

    Ok(())
}
