//! Automated tic-tac-toe players.
//!
//! Every strategy implements the [`Player`] capability, so drivers can swap
//! between them (or a human input adapter) without touching game code.
//!
//! - [`SearchPlayer`]: exhaustive game-tree enumeration.
//! - [`HeuristicPlayer`]: takes an immediate win, blocks an immediate loss,
//!   otherwise plays randomly.
//! - [`RandomPlayer`]: uniform random choice.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod heuristic;
mod player;
mod random;
mod search;

pub use heuristic::HeuristicPlayer;
pub use player::{Player, PlayerKind};
pub use random::RandomPlayer;
pub use search::{ScoredMove, SearchPlayer, outcome_score};
