//! Command-line interface for tactix.

use clap::{Parser, Subcommand};

/// Tactix - optimal tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Play optimal tic-tac-toe, or watch the engine play itself", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; defaults to `play`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a game against the engine
    Play,

    /// Output a game of the engine against itself
    Watch,
}
