//! Tic-tac-toe game state engine.
//!
//! Owns the board, turn order and terminal/winner determination. The only
//! mutation is [`GameState::apply_move`]; everything else is a pure query,
//! so presentation layers and automated players can share one state type.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Cell, GameState};
//!
//! let mut game = GameState::new();
//! game.apply_move(1, 1)?;
//! assert_eq!(game.cell_at(1, 1)?, Cell::X);
//! assert_eq!(game.active_player(), Cell::O);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod rules;
mod state;
mod types;

pub use action::{GameError, Move};
pub use rules::{WIN_LINES, check_winner, is_full};
pub use state::GameState;
pub use types::{BOARD_SIZE, Board, Cell};
