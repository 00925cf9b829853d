//! Command implementations for the ffilter CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod domain;
pub mod eval;
pub mod loader;

use std::env;
use std::path::PathBuf;

use flood_filter_rs::selection::SelectionError;
use flood_filter_rs::taxonomy::PatchError;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A taxonomy feed message did not apply.
    #[error("taxonomy patch error: {0}")]
    Patch(#[from] PatchError),

    /// A gesture could not be parsed or applied.
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),

    /// An input file has the wrong shape.
    #[error("invalid input in {path}: {message}")]
    Input {
        /// File that failed to load.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },

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

impl CommandError {
    /// Creates an input error for a file.
    pub fn input(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        CommandError::Input {
            path: path.into(),
            message: message.to_string(),
        }
    }
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
    /// Loaded configuration.
    pub config: Config,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments and the config file.
    ///
    /// Flags win over the config file. `NO_COLOR` disables colors as well.
    pub fn from_cli(cli: &Cli, config: Config) -> Self {
        let json_output = cli.json || config.output.format.as_deref() == Some("json");
        let use_colors = !cli.no_color
            && env::var_os("NO_COLOR").is_none()
            && config.output.color.unwrap_or(true);

        Self {
            json_output,
            use_colors,
            quiet: cli.quiet,
            verbose: cli.verbose,
            config,
        }
    }

    /// Prints a warning to stderr unless quiet or producing JSON.
    pub fn warn(&self, message: &str) {
        if !self.quiet && !self.json_output {
            eprintln!("Warning: {message}");
        }
    }
}
