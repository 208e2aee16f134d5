//! Command-line interface for ultimate_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ultimate tic-tac-toe for two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate_games")]
#[command(about = "Hotseat ultimate tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, global = true, default_value = "ultimate.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game, reading moves from stdin
    Play,

    /// Replay a move script and print the resulting position
    Replay {
        /// Script with one `<sub_board> <cell>` move per line
        script: PathBuf,
    },

    /// Replay a move script and list the legal moves that follow
    Legal {
        /// Script with one `<sub_board> <cell>` move per line
        script: PathBuf,
    },
}
