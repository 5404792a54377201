//! Command-line interface for the tic-tac-toe arena.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_players::PlayerKind;

/// Tic-tac-toe arena - pit automated players against each other
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Headless tic-tac-toe match runner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match between two automated players
    Play {
        /// Path to a TOML arena config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Strategy for X (search, heuristic, random)
        #[arg(long)]
        x: Option<PlayerKind>,

        /// Strategy for O (search, heuristic, random)
        #[arg(long)]
        o: Option<PlayerKind>,

        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// Base seed for randomized players
        #[arg(long)]
        seed: Option<u64>,

        /// Print the match report as JSON
        #[arg(long)]
        json: bool,
    },
}
