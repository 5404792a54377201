//! Player trait and strategy selection.

use super::{HeuristicPlayer, RandomPlayer, SearchPlayer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Cell, GameError, GameState};
use tracing::instrument;

/// Capability shared by every player that can take a turn.
pub trait Player {
    /// The side this player plays as.
    fn owning_side(&self) -> Cell;

    /// Chooses a move and applies it to `state`.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotYourTurn`] if `state` is waiting on the other side.
    /// - [`GameError::GameAlreadyOver`] if `state` is terminal.
    fn take_turn(&mut self, state: &mut GameState) -> Result<(), GameError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Checks the preconditions shared by every automated player.
pub(crate) fn ensure_turn(side: Cell, state: &GameState) -> Result<(), GameError> {
    let active = state.active_player();
    if active != side {
        return Err(GameError::NotYourTurn { side, active });
    }
    if state.is_over() {
        return Err(GameError::GameAlreadyOver);
    }
    Ok(())
}

/// Rejects `Cell::Empty` as a side.
pub(crate) fn ensure_side(side: Cell) -> Result<Cell, GameError> {
    if side.is_player() {
        Ok(side)
    } else {
        Err(GameError::NoPlayerAssigned)
    }
}

/// Automated strategies, selectable by name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Exhaustive game-tree search.
    Search,
    /// Win/block heuristic with random fallback.
    Heuristic,
    /// Uniform random choice.
    Random,
}

impl PlayerKind {
    /// Builds a player of this kind for `side`.
    ///
    /// Randomized strategies draw from a `StdRng` seeded with `seed`, or from
    /// OS entropy when no seed is given.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayerAssigned`] if `side` is `Cell::Empty`.
    #[instrument]
    pub fn build(self, side: Cell, seed: Option<u64>) -> Result<Box<dyn Player>, GameError> {
        let rng = || seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let player: Box<dyn Player> = match self {
            PlayerKind::Search => Box::new(SearchPlayer::new(side)?),
            PlayerKind::Heuristic => Box::new(HeuristicPlayer::new(side, rng())?),
            PlayerKind::Random => Box::new(RandomPlayer::new(side, rng())?),
        };
        Ok(player)
    }
}
