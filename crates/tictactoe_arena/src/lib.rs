//! Headless match runner for automated tic-tac-toe players.
//!
//! Pits two [`PlayerKind`](tictactoe_players::PlayerKind)s against each
//! other for a number of games and tallies the results.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod config;

pub use arena::{Arena, GameRecord, MatchReport};
pub use config::{ArenaConfig, ConfigError};
