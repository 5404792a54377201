//! Game state and its single mutating operation.

use super::action::{GameError, Move};
use super::rules::terminal_status;
use super::types::{Board, Cell};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Complete tic-tac-toe game state.
///
/// `Clone` produces a fully independent copy; all fields are owned values.
/// Automated players rely on this to explore hypothetical moves without
/// touching the live game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    /// Side to move next. Not meaningful once the game is over.
    active_player: Cell,
    last_move: Option<Move>,
    over: bool,
    /// `Empty` while ongoing and on a draw.
    winner: Cell,
}

impl GameState {
    /// Creates a new game: empty board, `X` to move.
    #[instrument(level = "trace")]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Cell::X,
            last_move: None,
            over: false,
            winner: Cell::Empty,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either coordinate is outside `[0, 2]`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.board
            .get(row, col)
            .ok_or(GameError::OutOfBounds { row, col })
    }

    /// Returns the side to move next.
    pub fn active_player(&self) -> Cell {
        self.active_player
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns the winner, or `Cell::Empty` when ongoing or drawn.
    pub fn winner(&self) -> Cell {
        self.winner
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.board.empty_cells()
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.board.occupied_count()
    }

    /// Claims `(row, col)` for the active player.
    ///
    /// On success the move is recorded as the last move, the turn passes to
    /// the opponent and the terminal status is recomputed.
    ///
    /// # Errors
    ///
    /// Checked in order; the state is unchanged on error.
    /// - [`GameError::GameAlreadyOver`] if the game has ended.
    /// - [`GameError::OutOfBounds`] if either coordinate is outside `[0, 2]`.
    /// - [`GameError::CellOccupied`] if the cell is already claimed.
    #[instrument(level = "trace", skip(self), fields(player = %self.active_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.over {
            warn!(row, col, "Move rejected: game is over");
            return Err(GameError::GameAlreadyOver);
        }

        let occupant = self.cell_at(row, col).inspect_err(|_| {
            warn!(row, col, "Move rejected: off the board");
        })?;
        if occupant != Cell::Empty {
            warn!(row, col, %occupant, "Move rejected: cell occupied");
            return Err(GameError::CellOccupied { row, col, occupant });
        }

        let player = self.active_player;
        self.board.set(row, col, player);
        self.last_move = Some(Move::new(row, col, player));
        self.active_player = player.opponent();

        let (over, winner) = terminal_status(&self.board, self.last_move.as_ref());
        self.over = over;
        self.winner = winner;

        debug_assert!(
            self.check_invariants().is_ok(),
            "{:?}",
            self.check_invariants()
        );

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    active_player: Cell,
    last_move: Option<Move>,
    over: bool,
    winner: Cell,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            active_player: raw.active_player,
            last_move: raw.last_move,
            over: raw.over,
            winner: raw.winner,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state from raw parts, bypassing move validation.
    pub(crate) fn from_parts(board: Board, active_player: Cell, last_move: Option<Move>) -> Self {
        Self {
            board,
            active_player,
            last_move,
            over: false,
            winner: Cell::Empty,
        }
    }
}
