//! Git-backed diff provider.
//!
//! Runs git to obtain raw diff text, feeds it through [`parse_diff`], and
//! appends synthesized "all lines added" entries for untracked files.
//! Backend failures surface as a single [`HunksError::GitError`]; an
//! untracked file that cannot be read is logged and left out.

mod untracked;

#[cfg(test)]
mod tests;

pub use untracked::synthesize_added_file;

use crate::config::DiffKind;
use crate::diff::{FileChange, parse_diff};
use crate::error::{HunksError, Result};
use crate::git::run_git;
use serde::Serialize;
use std::path::PathBuf;

/// Width of the `XY ` status code prefix in `git status --porcelain` output.
const PORCELAIN_PREFIX_WIDTH: usize = 3;

/// Parsed diff for one diff kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    pub kind: DiffKind,
    pub files: Vec<FileChange>,
}

/// Obtains diffs and file contents from a git working tree.
#[derive(Debug, Clone)]
pub struct GitDiffProvider {
    repo_root: PathBuf,
    include_untracked: bool,
}

impl GitDiffProvider {
    pub fn new<P: Into<PathBuf>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.into(),
            include_untracked: true,
        }
    }

    /// Whether unstaged and combined diffs append untracked files.
    pub fn with_untracked(mut self, include: bool) -> Self {
        self.include_untracked = include;
        self
    }

    /// Raw `git diff` text for tracked changes of the given kind.
    pub fn raw_diff_text(&self, kind: DiffKind, context_lines: u32) -> Result<String> {
        let context = format!("-U{}", context_lines);
        let mut args = vec!["diff"];
        match kind {
            DiffKind::Staged => args.push("--cached"),
            DiffKind::Unstaged => {}
            DiffKind::All => args.push("HEAD"),
        }
        args.extend(["--no-color", "--no-ext-diff", context.as_str()]);

        let output = run_git(&self.repo_root, &args)?;
        Ok(output.stdout)
    }

    /// Parsed diff of the given kind, with untracked files appended when the
    /// kind covers the working tree.
    pub fn diff(&self, kind: DiffKind, context_lines: u32) -> Result<DiffResult> {
        let raw = self.raw_diff_text(kind, context_lines)?;
        let mut files = parse_diff(&raw);

        if self.include_untracked && kind.includes_untracked() {
            files.extend(self.untracked_changes());
        }

        Ok(DiffResult { kind, files })
    }

    /// Synthesized changes for every readable untracked file.
    fn untracked_changes(&self) -> Vec<FileChange> {
        let paths = match self.untracked_files() {
            Ok(paths) => paths,
            Err(e) => {
                log::warn!("could not list untracked files: {}", e);
                return Vec::new();
            }
        };

        paths
            .iter()
            .filter_map(|path| match self.untracked_file_diff(path) {
                Ok(change) => Some(change),
                Err(e) => {
                    log::warn!("skipping untracked file: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Changed paths from `git status --porcelain`, status codes stripped.
    pub fn status(&self) -> Result<Vec<String>> {
        let output = run_git(&self.repo_root, &["status", "--porcelain"])?;
        Ok(output
            .lines()
            .into_iter()
            .filter_map(parse_status_line)
            .map(str::to_string)
            .collect())
    }

    /// Content of `path` at HEAD, or the working-tree copy if HEAD lacks it.
    pub fn file_content(&self, path: &str) -> Result<String> {
        let object = format!("HEAD:{}", path);
        match run_git(&self.repo_root, &["show", &object]) {
            Ok(output) => Ok(output.stdout),
            Err(e) => {
                log::debug!("{} not in HEAD ({}), reading working tree", path, e);
                self.read_working_file(path)
            }
        }
    }

    /// Untracked, non-ignored files relative to the repository root.
    pub fn untracked_files(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.repo_root,
            &["ls-files", "--others", "--exclude-standard"],
        )?;
        Ok(output.lines().into_iter().map(str::to_string).collect())
    }

    /// Diff of an untracked file as if every line were added.
    pub fn untracked_file_diff(&self, path: &str) -> Result<FileChange> {
        let content = self.read_working_file(path)?;
        Ok(synthesize_added_file(path, &content))
    }

    /// Diff of a single file. Untracked files are synthesized; anything else
    /// is looked up in the diff of the given kind.
    ///
    /// # Returns
    ///
    /// * `Err(HunksError::UserError)` - The file is not part of the diff
    pub fn file_diff(&self, name: &str, kind: DiffKind, context_lines: u32) -> Result<FileChange> {
        match self.untracked_files() {
            Ok(untracked) if untracked.iter().any(|p| p == name) => {
                return self.untracked_file_diff(name);
            }
            Ok(_) => {}
            Err(e) => log::warn!("could not list untracked files: {}", e),
        }

        let result = self.diff(kind, context_lines)?;
        result
            .files
            .into_iter()
            .find(|f| f.path == name)
            .ok_or_else(|| HunksError::UserError(format!("file not found in diff: {}", name)))
    }

    /// [`Self::file_diff`] with enough context to show the whole file.
    pub fn file_diff_full_context(
        &self,
        name: &str,
        kind: DiffKind,
        full_context_lines: u32,
    ) -> Result<FileChange> {
        self.file_diff(name, kind, full_context_lines)
    }

    fn read_working_file(&self, path: &str) -> Result<String> {
        let full = self.repo_root.join(path);
        let bytes = std::fs::read(&full).map_err(|source| HunksError::FileRead {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Strip the fixed-width status code from a porcelain status line.
pub fn parse_status_line(line: &str) -> Option<&str> {
    let path = line.get(PORCELAIN_PREFIX_WIDTH..)?.trim();
    if path.is_empty() { None } else { Some(path) }
}
