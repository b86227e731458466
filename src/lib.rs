//! Parse git unified diffs into structured, line-numbered file changes.
//!
//! The [`diff`] module is the parser and data model; it performs no I/O.
//! The [`provider`] module runs git to obtain diff text and synthesizes
//! diffs for untracked files.

pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod provider;

#[cfg(test)]
mod test_support;
