//! Unified diff parsing for hunks.
//!
//! Turns the text produced by `git diff` into [`FileChange`] records with
//! classified, line-numbered hunk lines. The parser:
//! - is a single forward pass over the input lines
//! - never fails; malformed sections and hunk headers are skipped
//! - detects added, deleted, renamed, and binary files
//! - derives addition/deletion counts from the parsed lines only

mod helpers;
mod model;
mod parser;


// Re-export public API
pub use helpers::{HunkHeader, HunkRange, parse_hunk_header};
pub use model::{FileChange, FileStatus, Hunk, Line, LineKind};
pub use parser::parse_diff;
