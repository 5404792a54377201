//! State invariants for tic-tac-toe.
//!
//! These hold for every state reachable through [`GameState::apply_move`].
//! They are asserted after each move in debug builds and can be checked on
//! demand with [`GameState::check_invariants`].

use super::action::GameError;
use super::state::GameState;
use super::types::Cell;

/// A logical property that must hold for a given state.
trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A winner implies the game is over.
struct WinnerImpliesOver;

impl Invariant<GameState> for WinnerImpliesOver {
    fn holds(game: &GameState) -> bool {
        game.winner() == Cell::Empty || game.is_over()
    }

    fn description() -> &'static str {
        "A decided winner implies the game is over"
    }
}

/// X moves first and turns alternate, so X leads O by zero or one mark.
struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(game: &GameState) -> bool {
        let xs = game.board().count(Cell::X);
        let os = game.board().count(Cell::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X holds as many marks as O, or exactly one more"
    }
}

/// While the game runs, the side to move follows from the mark counts.
struct TurnMatchesMarks;

impl Invariant<GameState> for TurnMatchesMarks {
    fn holds(game: &GameState) -> bool {
        if game.is_over() {
            return true;
        }
        let board = game.board();
        let expected = if board.count(Cell::X) == board.count(Cell::O) {
            Cell::X
        } else {
            Cell::O
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "The active player matches the number of marks on the board"
    }
}

/// The last move is absent only on an empty board, and its cell holds its player.
struct LastMoveConsistent;

impl Invariant<GameState> for LastMoveConsistent {
    fn holds(game: &GameState) -> bool {
        match game.last_move() {
            None => game.move_count() == 0,
            Some(last) => {
                last.player.is_player() && game.cell_at(last.row, last.col) == Ok(last.player)
            }
        }
    }

    fn description() -> &'static str {
        "The last move is recorded on the board"
    }
}

fn check<I: Invariant<GameState>>(game: &GameState, violations: &mut Vec<&'static str>) {
    if !I::holds(game) {
        violations.push(I::description());
    }
}

impl GameState {
    /// Checks every state invariant.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvariantViolation`] listing each violated property.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let mut violations = Vec::new();
        check::<WinnerImpliesOver>(self, &mut violations);
        check::<BalancedMarks>(self, &mut violations);
        check::<TurnMatchesMarks>(self, &mut violations);
        check::<LastMoveConsistent>(self, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(violations.join("; ")))
        }
    }
}
