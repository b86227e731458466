//! Config loading, validation, and utility operations.

use super::model::{CONFIG_FILE_NAME, Config};
use crate::error::{HunksError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HunksError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HunksError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.hunks.yaml` from `repo_root`, or defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| HunksError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `full_context_lines` must be positive
    /// - `full_context_lines` must not be smaller than `context_lines`
    pub fn validate(&self) -> Result<()> {
        if self.full_context_lines == 0 {
            return Err(HunksError::UserError(
                "config validation failed: full_context_lines must be greater than 0".to_string(),
            ));
        }

        if self.full_context_lines < self.context_lines {
            return Err(HunksError::UserError(format!(
                "config validation failed: full_context_lines ({}) must be >= context_lines ({})",
                self.full_context_lines, self.context_lines
            )));
        }

        Ok(())
    }
}
