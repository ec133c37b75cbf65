use crate::error::DailyLogError;
use std::path::{Path, PathBuf};

/// Outcome of one run of the daily log writer.
#[derive(Debug)]
pub enum RunResult {
    /// A new log file was written at this path.
    Created(PathBuf),
    /// Today's log file was already present at this path.
    Skipped(PathBuf),
    Failed(DailyLogError),
}

impl RunResult {
    /// Process exit code: 0 only when something was written.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunResult::Created(_) => 0,
            RunResult::Skipped(_) | RunResult::Failed(_) => 1,
        }
    }

    pub fn has_changed(&self) -> bool {
        matches!(self, RunResult::Created(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RunResult::Created(path) | RunResult::Skipped(path) => Some(path),
            RunResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DailyLogError> {
        match self {
            RunResult::Failed(err) => Some(err),
            _ => None,
        }
    }
}
