//! Tests for arena configuration and match play.

use std::io::Write;
use tictactoe_arena::{Arena, ArenaConfig};
use tictactoe_core::Cell;
use tictactoe_players::PlayerKind;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Create temp file");
    writeln!(file, "x = \"heuristic\"\no = \"random\"\ngames = 3\nseed = 12").unwrap();

    let config = ArenaConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(*config.x(), PlayerKind::Heuristic);
    assert_eq!(*config.o(), PlayerKind::Random);
    assert_eq!(*config.games(), 3);
    assert_eq!(*config.seed(), Some(12));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_search_self_play_is_deterministic() {
    let config = ArenaConfig::new(PlayerKind::Search, PlayerKind::Search, 2, None);
    let report = Arena::new(config).run().expect("Match completes");

    // Search is deterministic: both games follow the same line.
    assert_eq!(report.x_wins, 2);
    assert_eq!(report.games[0].state, report.games[1].state);
    assert_eq!(report.games[0].state.move_count(), 7);
}

#[test]
fn test_search_against_random() {
    let config = ArenaConfig::new(PlayerKind::Random, PlayerKind::Search, 3, Some(2024));
    let report = Arena::new(config).run().expect("Match completes");

    assert_eq!(report.games.len(), 3);
    for game in &report.games {
        assert!(game.state.is_over());
        assert!(game.state.check_invariants().is_ok());
        if game.winner != Cell::Empty {
            assert_eq!(game.state.last_move().map(|m| m.player), Some(game.winner));
        }
    }
}

#[test]
fn test_report_serializes_to_json() {
    let config = ArenaConfig::new(PlayerKind::Heuristic, PlayerKind::Heuristic, 1, Some(1));
    let report = Arena::new(config).run().expect("Match completes");

    let json = serde_json::to_value(&report).expect("Serializable");
    assert_eq!(json["games"].as_array().map(Vec::len), Some(1));
    assert!(json["x_wins"].is_u64());
}
