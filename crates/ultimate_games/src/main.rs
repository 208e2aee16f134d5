//! Ultimate Games - hotseat CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_games::cli::{Cli, Command};
use ultimate_games::report::{describe, legal_moves_line};
use ultimate_games::{Hotseat, MoveScript, UltimateConfig};
use ultimate_tictactoe::{GameResult, GameSetup};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UltimateConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { script } => run_replay(&script, &config),
        Command::Legal { script } => run_legal(&script, &config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &UltimateConfig) -> Result<()> {
    let game = GameSetup::new().start(*config.first_player());
    let stdin = io::stdin();
    let mut hotseat = Hotseat::new(stdin.lock(), io::stdout(), *config.show_legal_moves());

    match hotseat.run(game)? {
        Some(finished) => info!(
            outcome = %finished.outcome(),
            moves = finished.history().len(),
            "Game over"
        ),
        None => info!("Game abandoned"),
    }
    Ok(())
}

/// Replay a script and print the position
#[instrument(skip(config))]
fn run_replay(script: &Path, config: &UltimateConfig) -> Result<()> {
    let result = MoveScript::from_file(script)?.run(*config.first_player())?;
    println!("{}", describe(&result));
    Ok(())
}

/// Replay a script and list what may follow
#[instrument(skip(config))]
fn run_legal(script: &Path, config: &UltimateConfig) -> Result<()> {
    let result = MoveScript::from_file(script)?.run(*config.first_player())?;
    println!("{}", describe(&result));
    if let GameResult::InProgress(game) = &result {
        println!("{}", legal_moves_line(&game.valid_moves()));
    }
    Ok(())
}
