//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Name of the optional config file at the repository root.
pub const CONFIG_FILE_NAME: &str = ".hunks.yaml";

/// Configuration for hunks.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Unchanged lines shown around each hunk (`git diff -U<n>`).
    #[serde(default = "default_context_lines")]
    pub context_lines: u32,

    /// Context used when a whole-file view is requested.
    #[serde(default = "default_full_context_lines")]
    pub full_context_lines: u32,

    /// Diff kind used when none is given on the command line.
    #[serde(default)]
    pub default_kind: DiffKind,

    /// Whether unstaged and combined diffs list untracked files as added.
    #[serde(default = "default_true")]
    pub include_untracked: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            full_context_lines: default_full_context_lines(),
            default_kind: DiffKind::default(),
            include_untracked: default_true(),
        }
    }
}
