//! Tic-tac-toe arena CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_arena::{Arena, ArenaConfig, MatchReport};
use tictactoe_core::Cell;
use tictactoe_players::PlayerKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x,
            o,
            games,
            seed,
            json,
        } => run_play(config, x, o, games, seed, json),
    }
}

/// Run a match and print the outcome.
fn run_play(
    config: Option<PathBuf>,
    x: Option<PlayerKind>,
    o: Option<PlayerKind>,
    games: Option<u32>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let base = match config {
        Some(path) => ArenaConfig::from_file(path)?,
        None => ArenaConfig::default(),
    };
    let config = base.with_overrides(x, o, games, seed);
    anyhow::ensure!(*config.games() > 0, "games must be at least 1");

    let arena = Arena::new(config);
    info!(config = ?arena.config(), "Starting match");
    let report = arena.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &MatchReport) {
    for game in &report.games {
        println!("Game {}:", game.index + 1);
        println!("{}", game.state.board());
        match game.winner {
            Cell::Empty => println!("The game is a draw!\n"),
            winner => println!("{} wins!\n", winner),
        }
    }
    println!(
        "X wins: {}  O wins: {}  Draws: {}",
        report.x_wins, report.o_wins, report.draws
    );
}
