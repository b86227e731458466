//! Implementation of the `hunks file` command.

use super::print_files;
use crate::cli::FileArgs;
use hunks::context::RepoContext;
use hunks::error::Result;

/// Execute the `hunks file` command.
///
/// Untracked files are shown as entirely added; tracked files are looked
/// up in the diff of the selected kind.
pub fn cmd_file(args: FileArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let kind = args.selection.kind.unwrap_or(ctx.config.default_kind);
    let provider = ctx.provider();

    let change = if args.full {
        provider.file_diff_full_context(&args.path, kind, ctx.config.full_context_lines)?
    } else {
        let context = args.selection.context.unwrap_or(ctx.config.context_lines);
        provider.file_diff(&args.path, kind, context)?
    };

    print_files(std::slice::from_ref(&change), args.selection.json)
}
