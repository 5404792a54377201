//! Draw detection logic for tic-tac-toe.

use super::super::Cell;
use super::super::types::Board;

/// Checks if every cell is claimed.
///
/// A full board is a draw only when [`check_winner`](super::check_winner)
/// found no winner for the final move.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|&c| c != Cell::Empty)
}
