//! Terminal-status rules for tic-tac-toe.
//!
//! Win detection only looks at the lines through the most recent move
//! (plus the anti-diagonal), so it needs the move as well as the board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner};

use super::{Cell, Move};
use super::types::Board;

/// Terminal status after a move: `(is_over, winner)`.
pub(crate) fn terminal_status(board: &Board, last_move: Option<&Move>) -> (bool, Cell) {
    let Some(last) = last_move else {
        return (false, Cell::Empty);
    };

    if let Some(winner) = check_winner(board, last) {
        return (true, winner);
    }

    (is_full(board), Cell::Empty)
}
