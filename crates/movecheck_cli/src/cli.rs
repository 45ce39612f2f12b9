//! Command-line interface for movecheck.

use clap::{Parser, Subcommand};

/// Movecheck - validate and replay tic-tac-toe move sequences
#[derive(Parser, Debug)]
#[command(name = "movecheck")]
#[command(about = "Validate and replay tic-tac-toe move sequences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a move sequence such as "X1Y5X9"
    Check {
        /// Committed move sequence
        sequence: String,

        /// Candidate tokens appended before validation
        #[arg(short, long, default_value = "")]
        candidate: String,

        /// Tag of the player who moves first
        #[arg(long, default_value_t = 'X')]
        player1_tag: char,

        /// Tag of the player who moves second
        #[arg(long, default_value_t = 'Y')]
        player2_tag: char,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play moves through a board, one NAME:CELL pair per argument
    Play {
        /// Path to a game config (player names and tags)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of the first player (ignored with --config)
        #[arg(long, default_value = "one")]
        player1: String,

        /// Name of the second player (ignored with --config)
        #[arg(long, default_value = "two")]
        player2: String,

        /// Moves to submit, e.g. "one:5" or "two:top-left"
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
