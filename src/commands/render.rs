//! Text rendering of parsed diffs.

use hunks::diff::{FileChange, Hunk, Line};
use std::fmt::Write;

/// Render file changes with a summary line per file and numbered hunk lines.
pub fn render_files(files: &[FileChange]) -> String {
    let mut out = String::new();
    for (i, file) in files.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_file(&mut out, file);
    }
    out
}

fn render_file(out: &mut String, file: &FileChange) {
    let name = if file.is_rename() {
        format!("{} -> {}", file.old_path, file.path)
    } else {
        file.path.clone()
    };

    if file.is_binary {
        let _ = writeln!(out, "{} {} [binary]", file.status, name);
        return;
    }

    let _ = writeln!(
        out,
        "{} {} (+{} -{})",
        file.status, name, file.additions, file.deletions
    );
    for hunk in &file.hunks {
        render_hunk(out, hunk);
    }
}

fn render_hunk(out: &mut String, hunk: &Hunk) {
    let _ = writeln!(out, "{}", hunk.header);
    for line in &hunk.lines {
        render_line(out, line);
    }
}

fn render_line(out: &mut String, line: &Line) {
    let gutter = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
    let _ = writeln!(
        out,
        "{:>5} {:>5} {}",
        gutter(line.kind.old_number()),
        gutter(line.kind.new_number()),
        line.to_diff_line()
    );
}
