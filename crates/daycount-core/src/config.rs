//! Configuration for the daily log writer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "daily_logs";
pub const DEFAULT_CONFIG_FILE: &str = "daycount.json";

/// How the new log file is put on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Create the file and write into it in place.
    #[default]
    Direct,
    /// Write a temp file next to it and move it into place without clobbering.
    Atomic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLogConfig {
    pub directory: PathBuf,
    pub write_mode: WriteMode,
}

impl Default for DailyLogConfig {
    fn default() -> Self {
        DailyLogConfig {
            directory: PathBuf::from(DEFAULT_LOG_DIR),
            write_mode: WriteMode::Direct,
        }
    }
}

impl DailyLogConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        DailyLogConfig {
            directory: directory.into(),
            ..Default::default()
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Reads a JSON config file. Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(DailyLogConfig::default());
        }
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
