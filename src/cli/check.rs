//! Dry-run a branch name against the work-in-progress rule.

use std::io::{self, Write};

use crate::error::Result;
use crate::guard::{decide, Verdict};

/// Run the check command.
pub fn run(branch: &str) -> Result<Verdict> {
    let verdict = decide(branch);
    report(&verdict, &mut io::stdout().lock())?;
    Ok(verdict)
}

fn report(verdict: &Verdict, out: &mut impl Write) -> io::Result<()> {
    if verdict.is_accepted() {
        writeln!(out, "Branch \"{}\" would be pushed", verdict.branch())
    } else {
        writeln!(out, "{}", verdict.message())
    }
}
