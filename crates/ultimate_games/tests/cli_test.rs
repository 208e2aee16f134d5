//! Tests for command-line parsing.

use clap::Parser;
use std::path::PathBuf;
use ultimate_games::cli::{Cli, Command};

#[test]
fn test_play_with_default_config() {
    let cli = Cli::try_parse_from(["ultimate_games", "play"]).unwrap();
    assert_eq!(cli.command, Command::Play);
    assert_eq!(cli.config, PathBuf::from("ultimate.toml"));
}

#[test]
fn test_replay_with_global_config_after_subcommand() {
    let cli =
        Cli::try_parse_from(["ultimate_games", "replay", "game.txt", "--config", "alt.toml"])
            .unwrap();
    assert_eq!(
        cli.command,
        Command::Replay {
            script: PathBuf::from("game.txt")
        }
    );
    assert_eq!(cli.config, PathBuf::from("alt.toml"));
}

#[test]
fn test_legal_requires_script() {
    assert!(Cli::try_parse_from(["ultimate_games", "legal"]).is_err());
}
