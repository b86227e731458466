//! Implementation of the `hunks parse` command.

use super::print_files;
use crate::cli::ParseArgs;
use hunks::diff::parse_diff;
use hunks::error::{HunksError, Result};
use std::io::Read;
use std::path::Path;

/// Execute the `hunks parse` command.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let text = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| HunksError::FileRead {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                HunksError::UserError(format!("failed to read diff from stdin: {}", e))
            })?;
            buf
        }
    };

    print_files(&parse_diff(&text), args.json)
}
