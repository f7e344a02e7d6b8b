//! Push guard: decides whether the checked-out branch may be pushed.
//!
//! A branch whose name starts with `#` followed by digits (`#42-fix-login`)
//! marks work in progress and is refused. Everything else goes through. The
//! outcome is always handed to a [`Recorder`] before it is returned.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::git::BranchSource;
use crate::hook_log::Recorder;

/// Work-in-progress marker: `#` then at least one ASCII digit, anchored at
/// the start only.
static WIP_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^#[0-9]+").expect("wip branch regex compiles"));

/// Outcome of a push check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted { branch: String },
    Rejected { branch: String, reason: String },
}

impl Verdict {
    pub fn branch(&self) -> &str {
        match self {
            Verdict::Accepted { branch } | Verdict::Rejected { branch, .. } => branch,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// Message written to the hook log (and, when rejected, to stdout).
    pub fn message(&self) -> String {
        match self {
            Verdict::Accepted { branch } => format!("Branch \"{}\" was pushed", branch),
            Verdict::Rejected { reason, .. } => reason.clone(),
        }
    }

    /// Process exit status understood by git: 0 lets the push through.
    pub fn exit_code(&self) -> u8 {
        if self.is_accepted() {
            0
        } else {
            1
        }
    }
}

/// Pure decision for a branch name.
pub fn decide(branch: &str) -> Verdict {
    if WIP_BRANCH.is_match(branch) {
        Verdict::Rejected {
            branch: branch.to_string(),
            reason: format!(
                "Branch \"{}\" was not pushed because its name starts with a \"#\" which marks it as work in progress",
                branch
            ),
        }
    } else {
        Verdict::Accepted {
            branch: branch.to_string(),
        }
    }
}

/// Log line for a push blocked by an infrastructure failure.
pub fn blocked_message(cause: &str, error: &Error) -> String {
    format!("Push was blocked because {}: {}", cause, error)
}

/// Best-effort record of a failure that blocks the push. Returns the error
/// so callers can propagate it.
pub fn record_block<R: Recorder>(recorder: &mut R, cause: &str, error: Error) -> Error {
    warn!(error = %error, cause, "Blocking push");
    if let Err(log_err) = recorder.record(&blocked_message(cause, &error)) {
        warn!(error = %log_err, "Failed to write hook log");
    }
    error
}

/// Single-shot pre-push check over injected collaborators.
pub struct PushGuard<S, R> {
    source: S,
    recorder: R,
}

impl<S: BranchSource, R: Recorder> PushGuard<S, R> {
    pub fn new(source: S, recorder: R) -> Self {
        Self { source, recorder }
    }

    /// Look up the checked-out branch, decide, and record the outcome.
    ///
    /// A failed branch lookup is returned as an error after a best-effort log
    /// entry; callers must treat it as a rejected push. A failed log write is
    /// returned as an error too, even when the branch itself was acceptable.
    pub fn evaluate(&mut self) -> Result<Verdict> {
        let branch = self
            .source
            .current_branch()
            .map_err(|e| {
                record_block(
                    &mut self.recorder,
                    "the current branch could not be determined",
                    e,
                )
            })?;

        let verdict = decide(&branch);
        self.recorder.record(&verdict.message())?;
        info!(
            branch = %verdict.branch(),
            accepted = verdict.is_accepted(),
            "Evaluated push"
        );
        Ok(verdict)
    }

    #[cfg(test)]
    pub fn recorder(&self) -> &R {
        &self.recorder
    }
}
