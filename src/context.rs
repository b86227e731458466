//! Repository context resolution for hunks.
//!
//! Finds the git repository root from any working directory and loads the
//! optional `.hunks.yaml` config found there.

use crate::config::Config;
use crate::error::{HunksError, Result};
use crate::git;
use crate::provider::GitDiffProvider;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved repository root and configuration.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the repository root.
    pub repo_root: PathBuf,
    pub config: Config,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Err(HunksError::UserError)` - Not in a git repository, or the config is invalid
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            HunksError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let repo_root = git::get_repo_root(cwd)?;
        let config = Config::load_or_default(&repo_root)?;
        Ok(Self { repo_root, config })
    }

    /// A provider for this repository honoring the config.
    pub fn provider(&self) -> GitDiffProvider {
        GitDiffProvider::new(&self.repo_root).with_untracked(self.config.include_untracked)
    }
}
