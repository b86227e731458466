//! Implementation of the `hunks show` command.

use crate::cli::ShowArgs;
use hunks::context::RepoContext;
use hunks::error::Result;

/// Execute the `hunks show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let ctx = RepoContext::resolve()?;
    let content = ctx.provider().file_content(&args.path)?;
    print!("{}", content);
    Ok(())
}
