//! Repository queries through the `git` command line.

use std::path::PathBuf;
use std::process::{Command, Output};

use tracing::debug;

use crate::error::{Error, Result};

/// Source of the currently checked-out branch name.
pub trait BranchSource {
    fn current_branch(&self) -> Result<String>;
}

/// Runs `git` inside a working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    fn output(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(Error::GitUnavailable)
    }

    /// Directory git runs hooks from. Follows `core.hooksPath` and resolves
    /// to the shared hooks of the main repository inside linked worktrees.
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let output = self.output(&["rev-parse", "--git-path", "hooks"])?;
        if !output.status.success() {
            return Err(Error::NotAGitRepo(self.work_dir.clone()));
        }

        let relative = String::from_utf8_lossy(&output.stdout).trim().to_string();
        // Relative output is relative to the working directory
        let hooks_dir = self.work_dir.join(relative);
        debug!(path = %hooks_dir.display(), "Resolved hooks directory");
        Ok(hooks_dir)
    }
}

impl BranchSource for GitCli {
    /// Full ref name of `HEAD` with `refs/heads/` stripped, so a tag sharing
    /// the branch name never disambiguates it into `heads/<name>`.
    fn current_branch(&self) -> Result<String> {
        let output = self.output(&["symbolic-ref", "-q", "HEAD"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // -q exits 1 silently when HEAD is not a symbolic ref
            if output.status.code() == Some(1) && stderr.is_empty() {
                return Err(Error::DetachedHead);
            }
            return Err(Error::GitFailed {
                command: "symbolic-ref".to_string(),
                stderr,
            });
        }

        let full_ref = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let branch = full_ref
            .strip_prefix("refs/heads/")
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::GitFailed {
                command: "symbolic-ref".to_string(),
                stderr: format!("HEAD points outside refs/heads: {:?}", full_ref),
            })?;

        debug!(branch = %branch, "Resolved current branch");
        Ok(branch.to_string())
    }
}
