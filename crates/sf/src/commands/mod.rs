//! Command implementations for the sf CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod completions;
pub mod config;
pub mod scan;
pub mod terms;

use std::env;
use std::io::IsTerminal;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Filter expression syntax error.
    #[error("syntax error: {0}")]
    Filter(#[from] sift_filter_rs::SyntaxError),

    /// Feed file error.
    #[error("feed error: {0}")]
    Feed(#[from] sift_feed_rs::FeedError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are enabled only when stdout is a terminal and neither
    /// `--no-color` nor the `NO_COLOR` environment variable is set.
    pub fn from_cli(cli: &Cli) -> Self {
        let use_colors =
            !cli.no_color && env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();

        Self {
            json_output: cli.json,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
