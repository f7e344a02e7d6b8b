//! CLI commands for wipguard.

pub mod check;
pub mod hooks;
pub mod pre_push;

use clap::{Parser, Subcommand};

/// wipguard - refuse to push work-in-progress branches
#[derive(Parser)]
#[command(name = "wipguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the checked-out branch (called by the git pre-push hook)
    PrePush {
        /// Name of the remote being pushed to (unused)
        remote: Option<String>,

        /// URL of the remote being pushed to (unused)
        url: Option<String>,
    },

    /// Show the verdict for a branch name without touching git or the log
    Check {
        /// Branch name to test
        branch: String,
    },

    /// Install the pre-push hook in this repository
    Install,

    /// Remove the pre-push hook from this repository
    Uninstall,
}
