//! Command implementations for hunks.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations and the shared output helpers.

mod diff;
mod file;
mod parse;
mod render;
mod show;
mod status;

use crate::cli::Command;
use hunks::diff::FileChange;
use hunks::error::{HunksError, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Diff(args) => diff::cmd_diff(args),
        Command::File(args) => file::cmd_file(args),
        Command::Parse(args) => parse::cmd_parse(args),
        Command::Status => status::cmd_status(),
        Command::Show(args) => show::cmd_show(args),
        Command::Untracked => status::cmd_untracked(),
    }
}

/// Print file changes as pretty JSON or as annotated text.
fn print_files(files: &[FileChange], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(files)
            .map_err(|e| HunksError::UserError(format!("failed to serialize diff: {}", e)))?;
        println!("{}", out);
    } else {
        print!("{}", render::render_files(files));
    }
    Ok(())
}
