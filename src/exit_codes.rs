//! Exit code constants for the hunks CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, file not in diff, invalid config)
//! - 3: Git invocation failure
//! - 4: Working-tree file could not be read

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or a path that is not part of the diff.
pub const USER_ERROR: i32 = 1;

/// Git could not be spawned or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// A file in the working tree could not be read.
pub const FILE_READ_FAILURE: i32 = 4;
