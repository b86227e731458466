//! Hunks: structured, line-numbered views of git diffs.
//!
//! This is the main entry point for the `hunks` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;

use cli::Cli;
use hunks::exit_codes;
use std::process::ExitCode;

/// Environment variable holding the log filter (e.g. `debug`, `hunks=trace`).
const LOG_ENV: &str = "HUNKS_LOG";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
