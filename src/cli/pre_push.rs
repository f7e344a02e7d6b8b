//! Pre-push hook entry point.

use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::git::GitCli;
use crate::guard::{record_block, PushGuard, Verdict};
use crate::hook_log::HookLog;

/// Run the check from the current directory (git runs hooks at the work-tree root).
pub fn run() -> Result<Verdict> {
    let root = std::env::current_dir()?;
    let verdict = evaluate_in(&root)?;
    report(&verdict, &mut io::stdout().lock())?;
    Ok(verdict)
}

/// Evaluate the work tree at `root` and record the outcome.
///
/// An unreadable config still gets a log line, written to the default log
/// location.
pub fn evaluate_in(root: &Path) -> Result<Verdict> {
    let config = match Config::load(root) {
        Ok(config) => config,
        Err(e) => {
            let mut log = HookLog::new(Config::default().log_path(root));
            return Err(record_block(&mut log, "the hook config could not be loaded", e));
        }
    };
    let log = HookLog::new(config.log_path(root));

    PushGuard::new(GitCli::new(root), log).evaluate()
}

/// Print the rejection reason. Accepted pushes print nothing.
pub fn report(verdict: &Verdict, out: &mut impl Write) -> io::Result<()> {
    if let Verdict::Rejected { reason, .. } = verdict {
        writeln!(out, "{}", reason)?;
    }
    Ok(())
}
