//! Exhaustive game-tree search player.
//!
//! Scores every legal move by enumerating the entire remaining game tree.
//! Terminal states score `-1` for an X win, `+1` for an O win and `0` for a
//! draw. An interior state scores the plain sum of its children's scores, so
//! a move's score aggregates every finished game reachable from it. Only the
//! choice among the current position's moves applies a min/max: X takes the
//! lowest score, O the highest, ties going to the first move in row-major
//! order.
//!
//! Nothing is pruned or cached. From an empty board this visits every one of
//! the 549 945 reachable move sequences, which is only viable because the
//! board is 3x3.

use super::player::{Player, ensure_side, ensure_turn};
use tictactoe_core::{Cell, GameError, GameState};
use tracing::{debug, instrument};

/// A candidate move and its aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ScoredMove {
    /// Row of the candidate.
    pub row: usize,
    /// Column of the candidate.
    pub col: usize,
    /// Sum of terminal outcomes below the candidate.
    pub score: i64,
}

/// Player that enumerates the full remaining game tree before every move.
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    side: Cell,
    name: String,
}

impl SearchPlayer {
    /// Creates a search player for `side`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPlayerAssigned`] if `side` is `Cell::Empty`.
    #[instrument]
    pub fn new(side: Cell) -> Result<Self, GameError> {
        let side = ensure_side(side)?;
        Ok(Self {
            side,
            name: format!("Search ({side})"),
        })
    }

    /// Scores every empty cell of `state`, in row-major order.
    ///
    /// A finished game has no candidates, even if cells remain empty.
    #[instrument(skip(state))]
    pub fn score_candidates(state: &GameState) -> Result<Vec<ScoredMove>, GameError> {
        if state.is_over() {
            return Ok(Vec::new());
        }

        state
            .empty_cells()
            .map(|(row, col)| -> Result<ScoredMove, GameError> {
                let next = successor(state, row, col)?;
                Ok(ScoredMove::new(row, col, outcome_score(&next)?))
            })
            .collect()
    }

    /// Picks the move this player would make, without applying it.
    ///
    /// Returns `None` when `state` is over.
    #[instrument(skip(self, state), fields(side = %self.side))]
    pub fn choose_move(&self, state: &GameState) -> Result<Option<ScoredMove>, GameError> {
        let candidates = Self::score_candidates(state)?;
        let better = |candidate: &ScoredMove, best: &ScoredMove| match self.side {
            Cell::X => candidate.score < best.score,
            _ => candidate.score > best.score,
        };

        let mut best: Option<ScoredMove> = None;
        for candidate in candidates {
            if best.as_ref().is_none_or(|b| better(&candidate, b)) {
                best = Some(candidate);
            }
        }
        Ok(best)
    }
}

impl Player for SearchPlayer {
    fn owning_side(&self) -> Cell {
        self.side
    }

    #[instrument(skip(self, state), fields(side = %self.side))]
    fn take_turn(&mut self, state: &mut GameState) -> Result<(), GameError> {
        ensure_turn(self.side, state)?;

        let chosen = self.choose_move(state)?.ok_or_else(|| {
            GameError::InvariantViolation("Ongoing game has no empty cell".to_string())
        })?;
        debug!(row = chosen.row, col = chosen.col, score = chosen.score, "Search chose move");

        state.apply_move(chosen.row, chosen.col)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Scores `state` by summing terminal outcomes over its whole subtree.
///
/// A terminal state scores `-1` (X won), `+1` (O won) or `0` (draw).
#[instrument(level = "trace", skip(state))]
pub fn outcome_score(state: &GameState) -> Result<i64, GameError> {
    if state.is_over() {
        return Ok(match state.winner() {
            Cell::X => -1,
            Cell::O => 1,
            Cell::Empty => 0,
        });
    }

    state
        .empty_cells()
        .map(|(row, col)| -> Result<i64, GameError> {
            outcome_score(&successor(state, row, col)?)
        })
        .sum()
}

/// Copies `state` and plays `(row, col)` on the copy.
fn successor(state: &GameState, row: usize, col: usize) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.apply_move(row, col).map_err(|e| {
        GameError::InvariantViolation(format!("Search produced an illegal move: {e}"))
    })?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> GameState {
        let mut game = GameState::new();
        for &(r, c) in moves {
            game.apply_move(r, c).expect("Valid move");
        }
        game
    }

    #[test]
    fn test_terminal_scores() {
        let x_won = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(outcome_score(&x_won), Ok(-1));

        let o_won = play(&[(0, 1), (1, 0), (2, 0), (1, 1), (0, 0), (1, 2)]);
        assert_eq!(outcome_score(&o_won), Ok(1));

        let draw = play(&[(0, 0), (1, 1), (0, 2), (0, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)]);
        assert_eq!(outcome_score(&draw), Ok(0));
    }

    #[test]
    fn test_interior_score_is_sum() {
        // O to move with (0, 1) and (1, 2) left. O at (1, 2) wins the middle
        // row; O at (0, 1) lets X win the right column.
        let state = play(&[(0, 0), (1, 1), (0, 2), (1, 0), (2, 1), (2, 0), (2, 2)]);
        assert_eq!(state.active_player(), Cell::O);

        let candidates = SearchPlayer::score_candidates(&state).unwrap();
        assert_eq!(
            candidates,
            vec![ScoredMove::new(0, 1, -1), ScoredMove::new(1, 2, 1)]
        );
        assert_eq!(outcome_score(&state), Ok(0));
    }

    #[test]
    fn test_candidates_in_row_major_order() {
        let state = play(&[(1, 1), (0, 0)]);
        let coords: Vec<_> = SearchPlayer::score_candidates(&state)
            .unwrap()
            .iter()
            .map(|c| (c.row, c.col))
            .collect();
        assert_eq!(coords, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_no_candidates_when_over() {
        let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert!(SearchPlayer::score_candidates(&state).unwrap().is_empty());
    }
}
