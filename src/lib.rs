//! wipguard library.
//!
//! Git pre-push check that refuses to push work-in-progress branches.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod guard;
pub mod hook_log;

pub use error::Error;
pub use guard::{PushGuard, Verdict};
