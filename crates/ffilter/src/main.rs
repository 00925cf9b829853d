use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError};
use dispatch::Dispatch;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "FFILTER_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let dispatch = Dispatch::from_cli(cli);

    // Config commands load the file themselves.
    let config = if dispatch.needs_config() {
        load_config()?
    } else {
        Config::default()
    };

    let ctx = CommandContext::from_cli(cli, config);
    dispatch.execute(&ctx)
}

/// Installs the log subscriber on stderr.
///
/// `FFILTER_LOG` takes `EnvFilter` directives. Without it the level is
/// `warn`; `--verbose` raises it to `debug`, while `--quiet` and `--json`
/// lower it to `error` so stderr carries only the error object.
fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if cli.quiet || cli.json {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Patch(_) => "PATCH_ERROR",
        CommandError::Selection(_) => "SELECTION_ERROR",
        CommandError::Input { .. } => "INPUT_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Selection(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::Input { .. } => 3,
        CommandError::Io(_) => 3,
        CommandError::Patch(_) => 4,
        CommandError::Config(_) => 5,
    }
}
