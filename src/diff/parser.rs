//! Core diff parsing logic.

use super::helpers::{FILE_MARKER, HUNK_MARKER, parse_file_header, parse_hunk_header};
use super::model::{FileChange, FileStatus, Hunk, Line, LineKind};

/// Parse raw unified diff text into file changes.
///
/// Malformed file headers and hunk headers are skipped; parsing always
/// continues with the rest of the input, so this never fails.
///
/// # Arguments
///
/// * `diff_output` - Raw output of `git diff` for any number of files
///
/// # Returns
///
/// File changes in the order their `diff --git` sections appear.
pub fn parse_diff(diff_output: &str) -> Vec<FileChange> {
    if diff_output.is_empty() {
        return Vec::new();
    }

    let files = DiffParser::new(diff_output).parse();
    log::trace!("parsed {} file section(s) from diff", files.len());
    files
}

/// Single-pass scanner over the diff lines, tracking a cursor index.
struct DiffParser<'a> {
    lines: Vec<&'a str>,
    current: usize,
}

/// Status markers recognised inside a file section.
enum SectionLine<'a> {
    NewFile,
    DeletedFile,
    RenameFrom(&'a str),
    Binary,
    HunkHeader,
    Other,
}

impl<'a> SectionLine<'a> {
    fn classify(line: &'a str) -> Self {
        if line.starts_with("new file") {
            SectionLine::NewFile
        } else if line.starts_with("deleted file") {
            SectionLine::DeletedFile
        } else if let Some(rest) = line.strip_prefix("rename from") {
            SectionLine::RenameFrom(rest.strip_prefix(' ').unwrap_or(rest))
        } else if line.starts_with("Binary files") {
            SectionLine::Binary
        } else if line.starts_with(HUNK_MARKER) {
            SectionLine::HunkHeader
        } else {
            SectionLine::Other
        }
    }
}

impl<'a> DiffParser<'a> {
    fn new(diff_output: &'a str) -> Self {
        Self {
            lines: diff_output.split('\n').collect(),
            current: 0,
        }
    }

    fn parse(mut self) -> Vec<FileChange> {
        let mut files = Vec::new();

        while let Some(line) = self.peek() {
            if line.starts_with(FILE_MARKER) {
                files.push(self.parse_file());
            } else {
                self.current += 1;
            }
        }

        files
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.current).copied()
    }

    /// True when the cursor sits on a line that ends the current hunk body.
    fn at_hunk_boundary(&self) -> bool {
        match self.peek() {
            Some(line) => line.starts_with(HUNK_MARKER) || line.starts_with(FILE_MARKER),
            None => true,
        }
    }

    /// Parse one `diff --git` section. The cursor is on the marker line.
    fn parse_file(&mut self) -> FileChange {
        let mut file = FileChange::default();
        let mut status: Option<FileStatus> = None;

        let header = self.lines[self.current];
        match parse_file_header(header) {
            Some((old_path, path)) => {
                file.old_path = old_path;
                file.path = path;
            }
            None => log::debug!("unrecognised file header, paths left empty: {:?}", header),
        }
        self.current += 1;

        while let Some(line) = self.peek() {
            if line.starts_with(FILE_MARKER) {
                break;
            }

            match SectionLine::classify(line) {
                SectionLine::NewFile => status = Some(FileStatus::Added),
                SectionLine::DeletedFile => status = Some(FileStatus::Deleted),
                SectionLine::RenameFrom(old_path) => {
                    status = Some(FileStatus::Renamed);
                    file.old_path = old_path.to_string();
                }
                SectionLine::Binary => file.is_binary = true,
                SectionLine::HunkHeader => {
                    // parse_hunk always consumes at least the header line
                    if let Some(hunk) = self.parse_hunk() {
                        file.hunks.push(hunk);
                    }
                    continue;
                }
                SectionLine::Other => {}
            }
            self.current += 1;
        }

        file.status = status.unwrap_or_default();
        if file.is_binary {
            file.hunks.clear();
        }
        file.recount();
        file
    }

    /// Parse one hunk. The cursor is on the `@@` header line.
    ///
    /// Returns `None` if the header is malformed or a line number would
    /// overflow. The header line is consumed either way; on overflow the
    /// rest of the body is consumed too.
    fn parse_hunk(&mut self) -> Option<Hunk> {
        let header_line = self.lines[self.current];
        let Some(header) = parse_hunk_header(header_line) else {
            log::debug!("skipping malformed hunk header: {:?}", header_line);
            self.current += 1;
            return None;
        };

        let mut hunk = Hunk {
            old_start: header.old.start,
            old_lines: header.old.line_count(),
            new_start: header.new.start,
            new_lines: header.new.line_count(),
            header: header_line.to_string(),
            lines: Vec::new(),
        };
        self.current += 1;

        let mut old_line = hunk.old_start;
        let mut new_line = hunk.new_start;

        while !self.at_hunk_boundary() {
            let line = self.lines[self.current];
            self.current += 1;

            let Some(marker) = line.chars().next() else {
                continue;
            };
            let content = &line[marker.len_utf8()..];

            let kind = match marker {
                '+' => LineKind::Added { new: new_line },
                '-' => LineKind::Deleted { old: old_line },
                ' ' => LineKind::Context {
                    old: old_line,
                    new: new_line,
                },
                // "\ No newline at end of file" and anything unexpected
                _ => continue,
            };
            let advanced = (
                advance(old_line, kind.old_number().is_some()),
                advance(new_line, kind.new_number().is_some()),
            );
            let (Some(next_old), Some(next_new)) = advanced else {
                log::debug!("line numbers overflow in hunk {:?}, skipping it", header_line);
                self.skip_hunk_body();
                return None;
            };
            old_line = next_old;
            new_line = next_new;

            hunk.lines.push(Line {
                kind,
                content: content.to_string(),
            });
        }

        Some(hunk)
    }

    fn skip_hunk_body(&mut self) {
        while !self.at_hunk_boundary() {
            self.current += 1;
        }
    }
}

/// Next value of a line counter, or `None` if it would overflow.
fn advance(counter: usize, used: bool) -> Option<usize> {
    if used { counter.checked_add(1) } else { Some(counter) }
}
