//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Occupant of a board cell.
///
/// `X` always moves first. The same type names the side a player plays as,
/// so `Empty` doubles as "no player" for winners and unassigned players.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Unclaimed cell.
    #[default]
    #[display(" ")]
    Empty,
    /// Claimed by the first player.
    #[display("X")]
    X,
    /// Claimed by the second player.
    #[display("O")]
    O,
}

impl Cell {
    /// Returns the opposing side. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    /// True for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Addressed by `(row, col)` with `(0, 0)` in the top-left corner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets the cell at `(row, col)`. Callers validate coordinates first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Checks if the cell at `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Iterates the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of claimed cells.
    pub fn occupied_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.count(Cell::Empty)
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] [{}] [{}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
