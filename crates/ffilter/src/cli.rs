//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ffilter CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flood_api_rs::models::Dimension;

/// ffilter - Filter a Flood torrent list the way the web client does
#[derive(Parser, Debug)]
#[command(name = "ffilter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply gestures and search, then list the visible torrents
    #[command(alias = "e")]
    Eval {
        /// Torrent list JSON (array, or object keyed by hash)
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Taxonomy JSON (full feed message or plain taxonomy object)
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,

        /// Feed message or patch array to apply, in order (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        patch: Vec<PathBuf>,

        /// Gesture as [mods:]dimension=key, e.g. "shift+alt:tag=movies" (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        select: Vec<String>,

        /// Case-insensitive substring of the torrent name
        #[arg(long)]
        search: Option<String>,

        /// Limit results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the ordered domain of a dimension
    #[command(alias = "d")]
    Domain {
        /// Dimension to list
        #[arg(value_enum)]
        dimension: DimensionArg,

        /// Taxonomy JSON (full feed message or plain taxonomy object)
        #[arg(short, long)]
        taxonomy: Option<PathBuf>,

        /// Torrent list to derive the taxonomy from when none is given
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Feed message or patch array to apply, in order (repeatable)
        #[arg(short, long, action = clap::ArgAction::Append)]
        patch: Vec<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Dimension names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionArg {
    Status,
    #[value(alias = "tags")]
    Tag,
    #[value(alias = "trackers")]
    Tracker,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Status => Dimension::Status,
            DimensionArg::Tag => Dimension::Tag,
            DimensionArg::Tracker => Dimension::Tracker,
        }
    }
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print config file path
    Path,

    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
