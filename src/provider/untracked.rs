//! Synthesized diffs for files git does not track yet.

use crate::diff::{FileChange, FileStatus, Hunk, Line, LineKind};

/// Build an "every line added" file change for an untracked file.
///
/// The result has a single hunk `@@ -0,0 +1,<N> @@` whose lines are numbered
/// from 1. Lines are split on `\n` only, so a `\r` before it stays in the
/// content. A trailing newline does not produce an extra empty line.
pub fn synthesize_added_file(path: &str, content: &str) -> FileChange {
    let body = content.strip_suffix('\n').unwrap_or(content);
    let pieces = if content.is_empty() {
        Vec::new()
    } else {
        body.split('\n').collect()
    };
    let lines: Vec<Line> = pieces
        .into_iter()
        .enumerate()
        .map(|(i, text)| Line {
            kind: LineKind::Added { new: i + 1 },
            content: text.to_string(),
        })
        .collect();
    let count = lines.len();

    FileChange {
        old_path: path.to_string(),
        path: path.to_string(),
        status: FileStatus::Added,
        is_binary: false,
        additions: count,
        deletions: 0,
        hunks: vec![Hunk {
            old_start: 0,
            old_lines: 0,
            new_start: 1,
            new_lines: count,
            header: format!("@@ -0,0 +1,{} @@", count),
            lines,
        }],
    }
}
