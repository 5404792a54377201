//! Uniform random player.

use super::player::{Player, ensure_side, ensure_turn};
use rand::Rng;
use rand::seq::IteratorRandom;
use tictactoe_core::{Cell, GameError, GameState};
use tracing::{debug, instrument};

/// Player that picks uniformly among the empty cells.
///
/// The random source is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R> {
    side: Cell,
    rng: R,
    name: String,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player for `side` drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayerAssigned`] if `side` is `Cell::Empty`.
    pub fn new(side: Cell, rng: R) -> Result<Self, GameError> {
        let side = ensure_side(side)?;
        Ok(Self {
            side,
            rng,
            name: format!("Random ({side})"),
        })
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn owning_side(&self) -> Cell {
        self.side
    }

    #[instrument(skip(self, state), fields(side = %self.side))]
    fn take_turn(&mut self, state: &mut GameState) -> Result<(), GameError> {
        ensure_turn(self.side, state)?;

        let (row, col) = state.empty_cells().choose(&mut self.rng).ok_or_else(|| {
            GameError::InvariantViolation("Ongoing game has no empty cell".to_string())
        })?;
        debug!(row, col, "Random chose move");

        state.apply_move(row, col)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
