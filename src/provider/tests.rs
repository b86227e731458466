//! Tests for the git diff provider.

use super::{GitDiffProvider, parse_status_line, synthesize_added_file};
use crate::config::DiffKind;
use crate::diff::{FileStatus, LineKind};
use crate::error::HunksError;
use crate::test_support::{create_test_repo, git, write_file};
use tempfile::TempDir;

/// Repo with a committed `src/lib.rs`, a staged edit to it, and an unstaged
/// edit to `README.md`.
fn repo_with_changes() -> TempDir {
    let temp_dir = create_test_repo();
    let path = temp_dir.path();

    write_file(path, "src/lib.rs", "fn a() {}\nfn b() {}\nfn c() {}\n");
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Add lib"]);

    write_file(path, "src/lib.rs", "fn a() {}\nfn b2() {}\nfn c() {}\n");
    git(path, &["add", "src/lib.rs"]);
    write_file(path, "README.md", "# Test\nMore docs\n");

    temp_dir
}

#[test]
fn test_synthesize_added_file() {
    let change = synthesize_added_file("notes.txt", "one\ntwo\nthree\nfour\nfive\n");

    assert_eq!(change.status, FileStatus::Added);
    assert_eq!(change.path, "notes.txt");
    assert_eq!(change.old_path, "notes.txt");
    assert_eq!((change.additions, change.deletions), (5, 0));
    assert_eq!(change.hunks.len(), 1);

    let hunk = &change.hunks[0];
    assert_eq!(
        (hunk.old_start, hunk.old_lines, hunk.new_start, hunk.new_lines),
        (0, 0, 1, 5)
    );
    assert_eq!(hunk.header, "@@ -0,0 +1,5 @@");
    for (i, line) in hunk.lines.iter().enumerate() {
        assert_eq!(line.kind, LineKind::Added { new: i + 1 });
    }
    assert_eq!(hunk.lines[4].content, "five");
}

#[test]
fn test_synthesize_without_trailing_newline() {
    let change = synthesize_added_file("a", "x\ny");
    assert_eq!(change.hunks[0].new_lines, 2);
    assert_eq!(change.hunks[0].header, "@@ -0,0 +1,2 @@");
}

#[test]
fn test_synthesize_keeps_carriage_returns() {
    let change = synthesize_added_file("win.txt", "one\r\ntwo\r\n");
    let hunk = &change.hunks[0];

    assert_eq!(hunk.new_lines, 2);
    assert_eq!(hunk.lines[0].content, "one\r");
    assert_eq!(hunk.body(), "+one\r\n+two\r\n");
}

#[test]
fn test_synthesize_blank_lines() {
    let change = synthesize_added_file("gaps", "\n\nx\n");
    assert_eq!(change.hunks[0].new_lines, 3);
    assert_eq!(change.hunks[0].lines[0].content, "");
    assert_eq!(change.hunks[0].lines[2].content, "x");
}

#[test]
fn test_synthesize_empty_file() {
    let change = synthesize_added_file("empty", "");
    assert_eq!(change.additions, 0);
    assert!(change.hunks[0].lines.is_empty());
    assert_eq!(change.hunks[0].header, "@@ -0,0 +1,0 @@");
}

#[test]
fn test_parse_status_line() {
    assert_eq!(parse_status_line(" M README.md"), Some("README.md"));
    assert_eq!(parse_status_line("M  src/lib.rs"), Some("src/lib.rs"));
    assert_eq!(parse_status_line("?? new file.txt"), Some("new file.txt"));
    assert_eq!(parse_status_line("?? "), None);
    assert_eq!(parse_status_line("M"), None);
}

#[test]
fn test_raw_diff_text_per_kind() {
    let temp_dir = repo_with_changes();
    let provider = GitDiffProvider::new(temp_dir.path());

    let staged = provider.raw_diff_text(DiffKind::Staged, 3).unwrap();
    assert!(staged.contains("diff --git a/src/lib.rs b/src/lib.rs"));
    assert!(!staged.contains("README.md"));

    let unstaged = provider.raw_diff_text(DiffKind::Unstaged, 3).unwrap();
    assert!(unstaged.contains("README.md"));
    assert!(!unstaged.contains("src/lib.rs"));

    let all = provider.raw_diff_text(DiffKind::All, 3).unwrap();
    assert!(all.contains("README.md"));
    assert!(all.contains("src/lib.rs"));
}

#[test]
fn test_diff_staged_parses_changes() {
    let temp_dir = repo_with_changes();
    let provider = GitDiffProvider::new(temp_dir.path());

    let result = provider.diff(DiffKind::Staged, 3).unwrap();

    assert_eq!(result.kind, DiffKind::Staged);
    assert_eq!(result.files.len(), 1);
    let file = &result.files[0];
    assert_eq!(file.path, "src/lib.rs");
    assert_eq!(file.status, FileStatus::Modified);
    assert_eq!((file.additions, file.deletions), (1, 1));
    let deleted = file.hunks[0]
        .lines
        .iter()
        .find(|l| matches!(l.kind, LineKind::Deleted { .. }))
        .unwrap();
    assert_eq!(deleted.kind, LineKind::Deleted { old: 2 });
    assert_eq!(deleted.content, "fn b() {}");
}

#[test]
fn test_zero_context_omits_unchanged_lines() {
    let temp_dir = repo_with_changes();
    let provider = GitDiffProvider::new(temp_dir.path());

    let result = provider.diff(DiffKind::Staged, 0).unwrap();
    let lines = &result.files[0].hunks[0].lines;

    assert!(
        lines
            .iter()
            .all(|l| !matches!(l.kind, LineKind::Context { .. }))
    );
}

#[test]
fn test_untracked_files_appended_for_unstaged_and_all() {
    let temp_dir = repo_with_changes();
    write_file(temp_dir.path(), "notes/todo.txt", "a\nb\n");
    let provider = GitDiffProvider::new(temp_dir.path());

    for kind in [DiffKind::Unstaged, DiffKind::All] {
        let result = provider.diff(kind, 3).unwrap();
        let untracked = result
            .files
            .iter()
            .find(|f| f.path == "notes/todo.txt")
            .unwrap();
        assert_eq!(untracked.status, FileStatus::Added);
        assert_eq!(untracked.hunks[0].header, "@@ -0,0 +1,2 @@");
    }

    let staged = provider.diff(DiffKind::Staged, 3).unwrap();
    assert!(staged.files.iter().all(|f| f.path != "notes/todo.txt"));

    let without = GitDiffProvider::new(temp_dir.path()).with_untracked(false);
    let result = without.diff(DiffKind::All, 3).unwrap();
    assert!(result.files.iter().all(|f| f.path != "notes/todo.txt"));
}

#[test]
fn test_status_lists_changed_paths() {
    let temp_dir = repo_with_changes();
    write_file(temp_dir.path(), "scratch.txt", "x\n");
    let provider = GitDiffProvider::new(temp_dir.path());

    let status = provider.status().unwrap();

    assert!(status.contains(&"README.md".to_string()));
    assert!(status.contains(&"src/lib.rs".to_string()));
    assert!(status.contains(&"scratch.txt".to_string()));
}

#[test]
fn test_file_content_prefers_head() {
    let temp_dir = repo_with_changes();
    write_file(temp_dir.path(), "fresh.txt", "only on disk\n");
    let provider = GitDiffProvider::new(temp_dir.path());

    assert_eq!(provider.file_content("README.md").unwrap(), "# Test\n");
    assert_eq!(provider.file_content("fresh.txt").unwrap(), "only on disk\n");

    let err = provider.file_content("missing.txt").unwrap_err();
    assert!(matches!(err, HunksError::FileRead { .. }));
}

#[test]
fn test_file_diff_lookup() {
    let temp_dir = repo_with_changes();
    write_file(temp_dir.path(), "new.rs", "pub fn hello() {}\n");
    let provider = GitDiffProvider::new(temp_dir.path());

    let untracked = provider.file_diff("new.rs", DiffKind::Staged, 3).unwrap();
    assert_eq!(untracked.status, FileStatus::Added);
    assert_eq!(untracked.additions, 1);

    let tracked = provider.file_diff("src/lib.rs", DiffKind::All, 3).unwrap();
    assert_eq!(tracked.path, "src/lib.rs");

    let err = provider
        .file_diff("not-there.rs", DiffKind::All, 3)
        .unwrap_err();
    assert!(matches!(err, HunksError::UserError(_)));
    assert_eq!(err.to_string(), "file not found in diff: not-there.rs");
}

#[test]
fn test_file_diff_full_context_covers_whole_file() {
    let temp_dir = create_test_repo();
    let path = temp_dir.path();
    let original: String = (1..=20).map(|i| format!("line {}\n", i)).collect();
    write_file(path, "long.txt", &original);
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Add long file"]);
    write_file(path, "long.txt", &original.replace("line 10\n", "line ten\n"));

    let provider = GitDiffProvider::new(path);
    let narrow = provider.file_diff("long.txt", DiffKind::Unstaged, 3).unwrap();
    let full = provider
        .file_diff_full_context("long.txt", DiffKind::Unstaged, 999_999)
        .unwrap();

    assert_eq!(narrow.hunks[0].lines.len(), 8);
    assert_eq!(full.hunks.len(), 1);
    assert_eq!(full.hunks[0].lines.len(), 21);
    assert_eq!((full.hunks[0].old_start, full.hunks[0].new_start), (1, 1));
}

#[test]
fn test_git_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let provider = GitDiffProvider::new(temp_dir.path());

    let err = provider.diff(DiffKind::All, 3).unwrap_err();
    assert!(matches!(err, HunksError::GitError(_)));
}
