//! Move records and move errors.

use super::Cell;
use serde::{Deserialize, Serialize};

/// A move: `player` claimed the cell at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Row of the claimed cell.
    pub row: usize,
    /// Column of the claimed cell.
    pub col: usize,
    /// The side that made the move.
    pub player: Cell,
}

impl Move {
    /// Returns `(row, col)`.
    pub fn coords(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Error that can occur when querying, mutating or playing a game.
///
/// Every variant is recoverable; the state is untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate is outside `[0, 2]`.
    #[display("Coordinates ({row}, {col}) are off the board; each must be in [0, 2]")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell is already claimed.
    #[display("Cell ({row}, {col}) is already claimed by {occupant}")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Current occupant.
        occupant: Cell,
    },

    /// The game is over; no more moves can be made.
    #[display("The game is over; no more moves can be made")]
    GameAlreadyOver,

    /// A player tried to move for a side that is not active.
    #[display("It's not {side}'s turn ({active} to move)")]
    NotYourTurn {
        /// Side the player plays as.
        side: Cell,
        /// Side whose turn it is.
        active: Cell,
    },

    /// A player was constructed for `Cell::Empty`.
    #[display("Player must play as X or O")]
    NoPlayerAssigned,

    /// A state invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
