//! Append-only hook log.
//!
//! Every invocation adds one `<timestamp>: <message>` line. The file is never
//! rotated or truncated here.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::Result;

/// Timestamp layout used for log lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sink for push outcome messages.
pub trait Recorder {
    fn record(&mut self, message: &str) -> Result<()>;
}

/// Format a single log line (without the trailing newline).
pub fn format_line(at: NaiveDateTime, message: &str) -> String {
    format!("{}: {}", at.format(TIMESTAMP_FORMAT), message)
}

/// Log file at a fixed path, opened in append mode for each record.
#[derive(Debug, Clone)]
pub struct HookLog {
    path: PathBuf,
}

impl HookLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append_at(&self, at: NaiveDateTime, message: &str) -> Result<()> {
        // Missing parent directories are an error, not created.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Single write per line; concurrent hooks share the file in append mode
        file.write_all(format!("{}\n", format_line(at, message)).as_bytes())?;
        debug!(path = %self.path.display(), "Appended hook log entry");
        Ok(())
    }
}

impl Recorder for HookLog {
    fn record(&mut self, message: &str) -> Result<()> {
        self.append_at(Local::now().naive_local(), message)
    }
}
