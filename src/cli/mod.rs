//! CLI argument parsing for hunks.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use hunks::config::DiffKind;
use std::path::PathBuf;

/// Hunks: structured, line-numbered views of git diffs.
#[derive(Parser, Debug)]
#[command(name = "hunks")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hunks.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the parsed diff of the repository.
    ///
    /// Unstaged and combined diffs also list untracked files as added.
    Diff(DiffArgs),

    /// Show the parsed diff of a single file.
    File(FileArgs),

    /// Parse unified diff text from a file or stdin.
    ///
    /// Does not require a git repository.
    Parse(ParseArgs),

    /// List changed paths (`git status --porcelain`, status codes stripped).
    Status,

    /// Print a file's content at HEAD, or from disk if HEAD lacks it.
    Show(ShowArgs),

    /// List untracked files.
    Untracked,
}

/// Diff selection shared by `diff` and `file`.
#[derive(Args, Debug, Clone)]
pub struct DiffSelection {
    /// Which changes to show (defaults to `default_kind` from config).
    #[arg(long, value_enum)]
    pub kind: Option<DiffKind>,

    /// Lines of context around each hunk (defaults to `context_lines` from config).
    #[arg(short = 'U', long = "unified", value_name = "N")]
    pub context: Option<u32>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `diff` command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub selection: DiffSelection,

    /// Leave untracked files out.
    #[arg(long)]
    pub no_untracked: bool,
}

/// Arguments for the `file` command.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Repository-relative path of the file.
    pub path: String,

    #[command(flatten)]
    pub selection: DiffSelection,

    /// Show the whole file as context.
    #[arg(long, conflicts_with = "context")]
    pub full: bool,
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Diff file to read (stdin if omitted or `-`).
    pub input: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Repository-relative path of the file.
    pub path: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
