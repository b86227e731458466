//! Data model populated by the diff parser.

use serde::{Deserialize, Serialize};

/// How a file changed between the two sides of the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Deleted,
    #[default]
    Modified,
    Renamed,
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FileStatus::Added => "added",
            FileStatus::Deleted => "deleted",
            FileStatus::Modified => "modified",
            FileStatus::Renamed => "renamed",
        };
        write!(f, "{}", s)
    }
}

/// One file's delta.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileChange {
    /// Path before the change. Equal to `path` unless the file was renamed.
    pub old_path: String,
    /// Path after the change.
    pub path: String,
    pub status: FileStatus,
    /// True when git reported "Binary files ... differ" instead of hunks.
    pub is_binary: bool,
    /// Number of added lines across all hunks.
    pub additions: usize,
    /// Number of deleted lines across all hunks.
    pub deletions: usize,
    pub hunks: Vec<Hunk>,
}

impl FileChange {
    /// Recompute `additions` and `deletions` by tallying hunk lines.
    pub fn recount(&mut self) {
        let (mut additions, mut deletions) = (0, 0);
        for line in self.hunks.iter().flat_map(|h| h.lines.iter()) {
            match line.kind {
                LineKind::Added { .. } => additions += 1,
                LineKind::Deleted { .. } => deletions += 1,
                LineKind::Context { .. } => {}
            }
        }
        self.additions = additions;
        self.deletions = deletions;
    }

    /// True if the file was renamed to a different path.
    pub fn is_rename(&self) -> bool {
        self.status == FileStatus::Renamed && self.old_path != self.path
    }
}

/// One contiguous change region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hunk {
    /// 1-based start line in the old file (0 for an empty pre-image).
    pub old_start: usize,
    /// Line count in the old file. An omitted count is stored as 1.
    pub old_lines: usize,
    pub new_start: usize,
    pub new_lines: usize,
    /// The raw `@@ ... @@` header line.
    pub header: String,
    pub lines: Vec<Line>,
}

impl Hunk {
    /// Rebuild the hunk body as it appeared in the diff, one line per entry.
    pub fn body(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.to_diff_line());
            out.push('\n');
        }
        out
    }
}

/// One line within a hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    #[serde(flatten)]
    pub kind: LineKind,
    /// Line text without the leading marker character.
    pub content: String,
}

/// Line classification, carrying only the line numbers valid for that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LineKind {
    Context {
        #[serde(rename = "old_number")]
        old: usize,
        #[serde(rename = "new_number")]
        new: usize,
    },
    Added {
        #[serde(rename = "new_number")]
        new: usize,
    },
    Deleted {
        #[serde(rename = "old_number")]
        old: usize,
    },
}

impl LineKind {
    pub fn old_number(&self) -> Option<usize> {
        match *self {
            LineKind::Context { old, .. } | LineKind::Deleted { old } => Some(old),
            LineKind::Added { .. } => None,
        }
    }

    pub fn new_number(&self) -> Option<usize> {
        match *self {
            LineKind::Context { new, .. } | LineKind::Added { new } => Some(new),
            LineKind::Deleted { .. } => None,
        }
    }

    /// The unified-diff prefix character for this kind.
    pub fn marker(&self) -> char {
        match self {
            LineKind::Context { .. } => ' ',
            LineKind::Added { .. } => '+',
            LineKind::Deleted { .. } => '-',
        }
    }
}

impl Line {
    /// The line as it appears in a unified diff (marker plus content).
    pub fn to_diff_line(&self) -> String {
        let mut s = String::with_capacity(self.content.len() + 1);
        s.push(self.kind.marker());
        s.push_str(&self.content);
        s
    }
}
