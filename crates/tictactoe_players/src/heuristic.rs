//! Single-ply win/block heuristic player.

use super::player::{Player, ensure_side, ensure_turn};
use rand::Rng;
use rand::seq::IteratorRandom;
use tictactoe_core::{Cell, GameError, GameState, WIN_LINES};
use tracing::{debug, instrument};

/// Player that completes its own line, else blocks the opponent's, else
/// plays randomly.
#[derive(Debug, Clone)]
pub struct HeuristicPlayer<R> {
    side: Cell,
    rng: R,
    name: String,
}

impl<R: Rng> HeuristicPlayer<R> {
    /// Creates a heuristic player for `side` drawing fallback moves from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayerAssigned`] if `side` is `Cell::Empty`.
    pub fn new(side: Cell, rng: R) -> Result<Self, GameError> {
        let side = ensure_side(side)?;
        Ok(Self {
            side,
            rng,
            name: format!("Heuristic ({side})"),
        })
    }
}

/// First empty cell that would give `player` three in a line.
///
/// Lines are scanned in [`WIN_LINES`] order; a line qualifies when `player`
/// holds two of its cells and the third is empty.
pub(crate) fn completing_cell(state: &GameState, player: Cell) -> Option<(usize, usize)> {
    WIN_LINES.iter().find_map(|line| {
        let cells = line.map(|(r, c)| state.board().get(r, c));
        let owned = cells.iter().filter(|&&c| c == Some(player)).count();
        let gap = line
            .iter()
            .zip(cells)
            .find_map(|(&pos, cell)| (cell == Some(Cell::Empty)).then_some(pos));
        if owned == 2 { gap } else { None }
    })
}

impl<R: Rng> Player for HeuristicPlayer<R> {
    fn owning_side(&self) -> Cell {
        self.side
    }

    #[instrument(skip(self, state), fields(side = %self.side))]
    fn take_turn(&mut self, state: &mut GameState) -> Result<(), GameError> {
        ensure_turn(self.side, state)?;

        let (row, col) = if let Some(win) = completing_cell(state, self.side) {
            debug!(row = win.0, col = win.1, "Heuristic takes win");
            win
        } else if let Some(block) = completing_cell(state, self.side.opponent()) {
            debug!(row = block.0, col = block.1, "Heuristic blocks loss");
            block
        } else {
            let pick = state.empty_cells().choose(&mut self.rng).ok_or_else(|| {
                GameError::InvariantViolation("Ongoing game has no empty cell".to_string())
            })?;
            debug!(row = pick.0, col = pick.1, "Heuristic plays random move");
            pick
        };

        state.apply_move(row, col)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
