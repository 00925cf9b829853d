//! Command dispatch module for routing CLI commands to their handlers.

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::domain::DomainOptions;
use crate::commands::eval::EvalOptions;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Routes a parsed command line to its handler.
pub enum Dispatch<'a> {
    Eval(EvalOptions),
    Domain(DomainOptions),
    Config(&'a Option<ConfigCommands>),
    Completions(&'a crate::cli::Shell),
    Help,
}

impl<'a> Dispatch<'a> {
    /// Builds the dispatch for the CLI command.
    pub fn from_cli(cli: &'a Cli) -> Self {
        match &cli.command {
            Some(Commands::Eval {
                records,
                taxonomy,
                patch,
                select,
                search,
                limit,
            }) => Self::Eval(EvalOptions {
                records: records.clone(),
                taxonomy: taxonomy.clone(),
                patches: patch.clone(),
                gestures: select.clone(),
                search: search.clone(),
                limit: *limit,
            }),
            Some(Commands::Domain {
                dimension,
                taxonomy,
                records,
                patch,
            }) => Self::Domain(DomainOptions {
                dimension: (*dimension).into(),
                taxonomy: taxonomy.clone(),
                records: records.clone(),
                patches: patch.clone(),
            }),
            Some(Commands::Config { command }) => Self::Config(command),
            Some(Commands::Completions { shell }) => Self::Completions(shell),
            None => Self::Help,
        }
    }

    /// Returns true if the handler reads `[data]` or `[output]` settings.
    pub fn needs_config(&self) -> bool {
        matches!(self, Self::Eval(_) | Self::Domain(_))
    }

    /// Runs the handler.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Eval(opts) => commands::eval::execute(ctx, opts),
            Self::Domain(opts) => commands::domain::execute(ctx, opts),
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("ffilter - Flood torrent filter");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
        Some(ConfigCommands::Init { force }) => commands::config::execute_init(ctx, *force),
    }
}
