//! Hotseat front end for the ultimate tic-tac-toe rules engine.
//!
//! Stands where a UI and network layer would: it owns the game value,
//! feeds moves to [`ultimate_tictactoe`] and prints what comes back.
//!
//! - **Config**: TOML settings ([`UltimateConfig`])
//! - **Scripts**: replayable move lists ([`MoveScript`])
//! - **Hotseat**: interactive two-player loop ([`Hotseat`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod hotseat;
pub mod report;
mod script;

pub use config::{ConfigError, UltimateConfig};
pub use hotseat::Hotseat;
pub use script::{MoveScript, ScriptError, ScriptedMove};
