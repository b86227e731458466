//! Header recognition for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// Marker that opens a file section.
pub(super) const FILE_MARKER: &str = "diff --git";

/// Marker that opens a hunk.
pub(super) const HUNK_MARKER: &str = "@@";

static FILE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^diff --git [a-z]/(.+) [a-z]/(.+)$").expect("Invalid file header regex")
});

static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("Invalid hunk header regex")
});

/// One side of a hunk header: `<start>[,<count>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkRange {
    pub start: usize,
    /// `None` when the header omitted the count.
    pub count: Option<usize>,
}

impl HunkRange {
    /// Number of lines covered. An omitted count means one line.
    pub fn line_count(&self) -> usize {
        self.count.unwrap_or(1)
    }
}

/// A parsed `@@ -a,b +c,d @@ section` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    pub old: HunkRange,
    pub new: HunkRange,
    /// Trailing text after the closing `@@` (often a function signature).
    pub section: String,
}

/// Parse the old and new paths from a `diff --git a/<old> b/<new>` line.
///
/// Paths containing spaces are split at the last ` <x>/` separator, which is
/// correct for the common case of an unrenamed file.
pub(super) fn parse_file_header(line: &str) -> Option<(String, String)> {
    let caps = FILE_HEADER_REGEX.captures(line)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

/// Parse a hunk header line.
///
/// Returns `None` if the line does not match
/// `@@ -<start>[,<count>] +<start>[,<count>] @@<text>` or a number does not
/// fit in `usize`.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<usize>().ok());
    // An omitted count is `Some(None)`; a count that does not fit is `None`.
    let count = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<usize>().ok().map(Some),
        None => Some(None),
    };

    Some(HunkHeader {
        old: HunkRange {
            start: num(1)?,
            count: count(2)?,
        },
        new: HunkRange {
            start: num(3)?,
            count: count(4)?,
        },
        section: caps
            .get(5)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}
