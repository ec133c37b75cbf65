//! Failure taxonomy for a single daily-log run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`DailyLogError`], one per step that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Directory,
    List,
    Write,
}

#[derive(Debug, Error)]
pub enum DailyLogError {
    #[error("Could not create directory '{}/': {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read files in '{}/' to determine count: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DailyLogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DailyLogError::Directory { .. } => ErrorKind::Directory,
            DailyLogError::List { .. } => ErrorKind::List,
            DailyLogError::Write { .. } => ErrorKind::Write,
        }
    }

    /// Severity prefix used when the error is reported through the run logger.
    pub fn label(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Directory => "FATAL ERROR",
            ErrorKind::List => "ERROR",
            ErrorKind::Write => "CRITICAL WRITE ERROR",
        }
    }
}
