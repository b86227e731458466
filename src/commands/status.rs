//! Implementation of the `hunks status` and `hunks untracked` commands.

use hunks::context::RepoContext;
use hunks::error::Result;

/// Execute the `hunks status` command.
pub fn cmd_status() -> Result<()> {
    let ctx = RepoContext::resolve()?;
    for path in ctx.provider().status()? {
        println!("{}", path);
    }
    Ok(())
}

/// Execute the `hunks untracked` command.
pub fn cmd_untracked() -> Result<()> {
    let ctx = RepoContext::resolve()?;
    for path in ctx.provider().untracked_files()? {
        println!("{}", path);
    }
    Ok(())
}
