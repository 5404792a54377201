//! Game loop between two automated players.

use super::ArenaConfig;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Cell, GameError, GameState};
use tictactoe_players::Player;
use tracing::{debug, info, instrument};

/// Seed offset between the X and O random streams of one game.
const O_SEED_OFFSET: u64 = 1 << 32;

/// Outcome of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Zero-based game number.
    pub index: u32,
    /// Winner, or `Cell::Empty` for a draw.
    pub winner: Cell,
    /// Final state of the game.
    pub state: GameState,
}

/// Tally of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Every game in play order.
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    fn record(&mut self, game: GameRecord) {
        match game.winner {
            Cell::X => self.x_wins += 1,
            Cell::O => self.o_wins += 1,
            Cell::Empty => self.draws += 1,
        }
        self.games.push(game);
    }
}

/// Runs matches described by an [`ArenaConfig`].
#[derive(Debug, Clone)]
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    /// Creates an arena for `config`.
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Plays every configured game.
    ///
    /// # Errors
    ///
    /// Propagates any [`GameError`] raised by a player.
    #[instrument(
        skip(self),
        fields(x = %self.config.x(), o = %self.config.o(), games = self.config.games())
    )]
    pub fn run(&self) -> Result<MatchReport, GameError> {
        let mut report = MatchReport::default();
        for index in 0..*self.config.games() {
            report.record(self.play_game(index)?);
        }
        info!(
            x_wins = report.x_wins,
            o_wins = report.o_wins,
            draws = report.draws,
            "Match finished"
        );
        Ok(report)
    }

    /// Plays game number `index` to completion.
    #[instrument(skip(self))]
    pub fn play_game(&self, index: u32) -> Result<GameRecord, GameError> {
        let seed = self.config.seed().map(|s| s.wrapping_add(u64::from(index)));
        let mut x = self.config.x().build(Cell::X, seed)?;
        let mut o = self
            .config
            .o()
            .build(Cell::O, seed.map(|s| s.wrapping_add(O_SEED_OFFSET)))?;

        let mut state = GameState::new();
        while !state.is_over() {
            let player: &mut dyn Player = match state.active_player() {
                Cell::X => x.as_mut(),
                _ => o.as_mut(),
            };
            debug!(player = player.name(), "Taking turn");
            player.take_turn(&mut state)?;
        }

        info!(index, winner = %state.winner(), moves = state.move_count(), "Game over");
        Ok(GameRecord {
            index,
            winner: state.winner(),
            state,
        })
    }
}
