//! Error types for hunks.
//!
//! The diff parser itself never fails; every variant here originates in the
//! git provider, the config layer, or the CLI.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hunks operations.
#[derive(Error, Debug)]
pub enum HunksError {
    /// Invalid arguments, invalid config, or a requested path that is not in the diff.
    #[error("{0}")]
    UserError(String),

    /// Git could not be executed or returned a non-zero exit status.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// A file in the working tree could not be read.
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HunksError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HunksError::UserError(_) => exit_codes::USER_ERROR,
            HunksError::GitError(_) => exit_codes::GIT_FAILURE,
            HunksError::FileRead { .. } => exit_codes::FILE_READ_FAILURE,
        }
    }
}

/// Result type alias for hunks operations.
pub type Result<T> = std::result::Result<T, HunksError>;
