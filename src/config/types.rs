//! Configuration types and defaults for hunks.

use serde::{Deserialize, Serialize};

/// Which set of tracked changes a diff covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Index against HEAD (`git diff --cached`).
    Staged,
    /// Working tree against the index (`git diff`).
    Unstaged,
    /// Working tree against HEAD (`git diff HEAD`).
    #[default]
    All,
}

impl DiffKind {
    /// Whether untracked files belong in a diff of this kind.
    pub fn includes_untracked(self) -> bool {
        matches!(self, Self::Unstaged | Self::All)
    }
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Staged => "staged",
            Self::Unstaged => "unstaged",
            Self::All => "all",
        };
        write!(f, "{}", s)
    }
}

pub(crate) fn default_context_lines() -> u32 {
    3
}

/// Large enough that git emits every unchanged line of the file.
pub(crate) fn default_full_context_lines() -> u32 {
    999_999
}

pub(crate) fn default_true() -> bool {
    true
}
