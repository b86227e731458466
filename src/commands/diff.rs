//! Implementation of the `hunks diff` command.

use super::print_files;
use crate::cli::DiffArgs;
use hunks::context::RepoContext;
use hunks::error::Result;

/// Execute the `hunks diff` command.
pub fn cmd_diff(args: DiffArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let kind = args.selection.kind.unwrap_or(ctx.config.default_kind);
    let context = args.selection.context.unwrap_or(ctx.config.context_lines);

    let mut provider = ctx.provider();
    if args.no_untracked {
        provider = provider.with_untracked(false);
    }

    let result = provider.diff(kind, context)?;
    log::info!("{} diff: {} file(s)", result.kind, result.files.len());

    print_files(&result.files, args.selection.json)
}
