//! Error types for wipguard.

use std::path::PathBuf;

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not run git: {0}")]
    GitUnavailable(std::io::Error),

    #[error("git {command} failed: {stderr}")]
    GitFailed { command: String, stderr: String },

    #[error("HEAD is detached, no branch is checked out")]
    DetachedHead,

    #[error("not a git repository: {0}")]
    NotAGitRepo(PathBuf),

    #[error("config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
