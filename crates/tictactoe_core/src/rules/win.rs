//! Win detection logic for tic-tac-toe.

use super::super::types::Board;
use super::super::{Cell, Move};
use tracing::instrument;

/// The eight three-cell lines, as `(row, col)` triples.
///
/// Rows, then columns, then the top-left diagonal, then the bottom-left
/// anti-diagonal.
pub const WIN_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks whether `last` won the game.
///
/// Only the mover can win. The row and column through the move are checked,
/// the top-left diagonal only when the move lies on it, and the anti-diagonal
/// on every move regardless of where the move was played.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board, last: &Move) -> Option<Cell> {
    let mover = last.player;
    if !mover.is_player() {
        return None;
    }

    let (x, y) = last.coords();
    let row = line_owned(board, mover, (0..3).map(|j| (x, j)));
    let column = line_owned(board, mover, (0..3).map(|i| (i, y)));
    let diagonal = x == y && line_owned(board, mover, (0..3).map(|i| (i, i)));
    let anti_diagonal = line_owned(board, mover, (0..3).map(|i| (2 - i, i)));

    (row || column || diagonal || anti_diagonal).then_some(mover)
}

fn line_owned(board: &Board, mover: Cell, mut cells: impl Iterator<Item = (usize, usize)>) -> bool {
    cells.all(|(r, c)| board.get(r, c) == Some(mover))
}
