//! Per-repository configuration.
//!
//! Handles loading `.githooks/wipguard.toml`. The file is optional; a
//! repository without one gets the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Directory holding the hook log and config, relative to the work-tree root.
pub const HOOKS_DIR: &str = ".githooks";

/// Repository configuration stored in `.githooks/wipguard.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log file, relative to the work-tree root.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    Path::new(HOOKS_DIR).join("hooks.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Get the config file path for a work tree.
    pub fn path(root: &Path) -> PathBuf {
        root.join(HOOKS_DIR).join("wipguard.toml")
    }

    /// Load config from a work tree, falling back to defaults if absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path,
            message: e.to_string(),
        })
    }

    /// Absolute log file location for a work tree.
    pub fn log_path(&self, root: &Path) -> PathBuf {
        root.join(&self.log_file)
    }
}
