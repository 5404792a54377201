//! Arena configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_players::PlayerKind;
use tracing::{debug, info, instrument};

/// Which players meet, and for how many games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Strategy playing X.
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Strategy playing O.
    #[serde(default = "default_o")]
    o: PlayerKind,

    /// Number of games to play.
    #[serde(default = "default_games")]
    games: u32,

    /// Base seed for randomized players; `None` draws from OS entropy.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_x() -> PlayerKind {
    PlayerKind::Search
}

fn default_o() -> PlayerKind {
    PlayerKind::Heuristic
}

fn default_games() -> u32 {
    1
}

impl ArenaConfig {
    /// Creates a configuration.
    pub fn new(x: PlayerKind, o: PlayerKind, games: u32, seed: Option<u64>) -> Self {
        Self { x, o, games, seed }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x, o = %config.o, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        if config.games == 0 {
            return Err(ConfigError::new("games must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        x: Option<PlayerKind>,
        o: Option<PlayerKind>,
        games: Option<u32>,
        seed: Option<u64>,
    ) -> Self {
        self.x = x.unwrap_or(self.x);
        self.o = o.unwrap_or(self.o);
        self.games = games.unwrap_or(self.games);
        self.seed = seed.or(self.seed);
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(default_x(), default_o(), default_games(), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
