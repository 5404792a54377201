//! Tests for the exhaustive search player.

use tictactoe_core::{Cell, GameError, GameState, Move};
use tictactoe_players::{Player, ScoredMove, SearchPlayer, outcome_score};

fn play(moves: &[(usize, usize)]) -> GameState {
    let mut game = GameState::new();
    for &(r, c) in moves {
        game.apply_move(r, c).expect("Valid move");
    }
    game
}

fn scores(state: &GameState) -> Vec<((usize, usize), i64)> {
    SearchPlayer::score_candidates(state)
        .expect("Search succeeds")
        .into_iter()
        .map(|m| ((m.row, m.col), m.score))
        .collect()
}

#[test]
fn test_opening_scores_from_empty_board() {
    let state = GameState::new();
    assert_eq!(
        scores(&state),
        vec![
            ((0, 0), -6756),
            ((0, 1), -4056),
            ((0, 2), -6756),
            ((1, 0), -4056),
            ((1, 1), -10032),
            ((1, 2), -4056),
            ((2, 0), -6756),
            ((2, 1), -4056),
            ((2, 2), -6756),
        ]
    );

    let x = SearchPlayer::new(Cell::X).unwrap();
    assert_eq!(
        x.choose_move(&state).unwrap(),
        Some(ScoredMove::new(1, 1, -10032))
    );
}

#[test]
fn test_second_player_reply_to_corner() {
    let state = play(&[(0, 0)]);
    let o = SearchPlayer::new(Cell::O).unwrap();
    assert_eq!(o.choose_move(&state).unwrap(), Some(ScoredMove::new(1, 1, -124)));
}

#[test]
fn test_second_player_takes_immediate_win() {
    // O completes the middle column at (1, 1).
    let mut state = play(&[(0, 0), (0, 1), (0, 2), (2, 1), (2, 0)]);
    assert_eq!(
        scores(&state),
        vec![((1, 0), -1), ((1, 1), 1), ((1, 2), -2), ((2, 2), -2)]
    );

    let mut o = SearchPlayer::new(Cell::O).unwrap();
    o.take_turn(&mut state).unwrap();

    assert_eq!(state.last_move(), Some(&Move::new(1, 1, Cell::O)));
    assert!(state.is_over());
    assert_eq!(state.winner(), Cell::O);
}

#[test]
fn test_sum_scoring_can_pass_over_immediate_win() {
    // O could win at (2, 1), but (2, 0) aggregates a larger subtree sum.
    let mut state = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0)]);
    assert_eq!(
        scores(&state),
        vec![((1, 2), -1), ((2, 0), 2), ((2, 1), 1), ((2, 2), -1)]
    );

    let mut o = SearchPlayer::new(Cell::O).unwrap();
    o.take_turn(&mut state).unwrap();

    assert_eq!(state.last_move(), Some(&Move::new(2, 0, Cell::O)));
    assert!(!state.is_over());
}

#[test]
fn test_ties_go_to_first_in_row_major_order() {
    // X: (1, 0) and (1, 2) both score -1.
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (2, 0), (0, 2)]);
    let x = SearchPlayer::new(Cell::X).unwrap();
    assert_eq!(x.choose_move(&state).unwrap(), Some(ScoredMove::new(1, 0, -1)));

    // O: (1, 2) and (2, 0) both score 1.
    let state = play(&[(2, 2), (1, 0), (0, 2), (1, 1), (2, 1)]);
    let o = SearchPlayer::new(Cell::O).unwrap();
    assert_eq!(o.choose_move(&state).unwrap(), Some(ScoredMove::new(1, 2, 1)));
}

#[test]
fn test_outcome_score_sums_children() {
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2)]);
    let total: i64 = scores(&state).iter().map(|&(_, s)| s).sum();
    assert_eq!(outcome_score(&state), Ok(total));
}

#[test]
fn test_search_does_not_touch_state_until_chosen() {
    let state = play(&[(0, 0), (1, 1), (0, 1)]);
    let before = state.clone();
    let o = SearchPlayer::new(Cell::O).unwrap();

    o.choose_move(&state).unwrap();
    assert_eq!(state, before);
}

#[test]
fn test_search_self_play() {
    let mut state = GameState::new();
    let mut players = [
        SearchPlayer::new(Cell::X).unwrap(),
        SearchPlayer::new(Cell::O).unwrap(),
    ];
    let mut moves = Vec::new();

    while !state.is_over() {
        let player = players
            .iter_mut()
            .find(|p| p.owning_side() == state.active_player())
            .expect("Both sides covered");
        player.take_turn(&mut state).unwrap();
        moves.push(state.last_move().map(Move::coords).unwrap());
    }

    assert_eq!(
        moves,
        vec![(1, 1), (0, 0), (0, 1), (2, 0), (1, 0), (2, 1), (1, 2)]
    );
    assert_eq!(state.winner(), Cell::X);
}

#[test]
fn test_not_your_turn() {
    let mut state = GameState::new();
    let mut o = SearchPlayer::new(Cell::O).unwrap();

    assert_eq!(
        o.take_turn(&mut state),
        Err(GameError::NotYourTurn {
            side: Cell::O,
            active: Cell::X
        })
    );
    assert_eq!(state, GameState::new());
}

#[test]
fn test_game_already_over() {
    // X wins; O would be next to move.
    let mut state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let mut o = SearchPlayer::new(Cell::O).unwrap();
    assert_eq!(o.take_turn(&mut state), Err(GameError::GameAlreadyOver));
}

#[test]
fn test_finished_game_with_empty_cells_has_no_choice() {
    // X wins the top row with four cells still empty.
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(state.empty_cells().count(), 4);

    assert_eq!(SearchPlayer::score_candidates(&state), Ok(Vec::new()));
    let x = SearchPlayer::new(Cell::X).unwrap();
    let o = SearchPlayer::new(Cell::O).unwrap();
    assert_eq!(x.choose_move(&state), Ok(None));
    assert_eq!(o.choose_move(&state), Ok(None));
}

#[test]
fn test_no_player_assigned() {
    assert!(matches!(
        SearchPlayer::new(Cell::Empty),
        Err(GameError::NoPlayerAssigned)
    ));
}
