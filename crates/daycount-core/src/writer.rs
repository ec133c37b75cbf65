//! Creates one sequentially numbered log file per calendar day.

use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{DailyLogConfig, WriteMode};
use crate::error::DailyLogError;
use crate::logging::RunLogger;
use crate::outcome::RunResult;

/// Only files with this extension take part in the day count.
pub const LOG_EXTENSION: &str = "txt";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DailyLogWriter {
    config: DailyLogConfig,
}

impl DailyLogWriter {
    pub fn new(config: DailyLogConfig) -> Self {
        DailyLogWriter { config }
    }

    /// Writes today's log file unless one for `today` already exists.
    ///
    /// Every failure is reported through `logger` and returned as
    /// [`RunResult::Failed`]; nothing is retried.
    pub fn run(&self, today: NaiveDate, logger: &mut RunLogger) -> RunResult {
        match self.try_run(today, logger) {
            Ok(result) => result,
            Err(err) => {
                logger.error(&format!("{}: {}", err.label(), err));
                RunResult::Failed(err)
            }
        }
    }

    fn try_run(
        &self,
        today: NaiveDate,
        logger: &mut RunLogger,
    ) -> Result<RunResult, DailyLogError> {
        let dir = &self.config.directory;

        ensure_directory(dir)?;
        logger.info(&format!(
            "Directory '{}/' checked/created successfully.",
            dir.display()
        ));

        let log_files = list_log_files(dir)?;
        // Today's file already counts towards the total, so look it up by date.
        if let Some(existing) = find_log_for_date(&log_files, today) {
            return Ok(skip(existing.to_path_buf(), logger));
        }

        let sequence = log_files.len() + 1;
        let path = dir.join(log_file_name(sequence, today));
        if path.exists() {
            return Ok(skip(path, logger));
        }

        let content = render_log(sequence, today);
        let written = match self.config.write_mode {
            WriteMode::Direct => write_new_file(&path, content.as_bytes()),
            WriteMode::Atomic => write_new_file_atomic(dir, &path, content.as_bytes()),
        };
        written.map_err(|source| DailyLogError::Write {
            path: path.clone(),
            source,
        })?;

        logger.info(&format!(
            "SUCCESS (Exit Code 0): Created new log file: {}",
            path.display()
        ));
        Ok(RunResult::Created(path))
    }
}

fn skip(path: PathBuf, logger: &mut RunLogger) -> RunResult {
    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned();
    logger.info(&format!(
        "Skipping update (Exit Code 1): Log file for today ({}) already exists.",
        name
    ));
    RunResult::Skipped(path)
}

/// Creates `dir` and any missing parents.
pub fn ensure_directory(dir: &Path) -> Result<(), DailyLogError> {
    fs::create_dir_all(dir).map_err(|source| DailyLogError::Directory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Regular files directly inside `dir` that carry the log extension, sorted by name.
pub fn list_log_files(dir: &Path) -> Result<Vec<PathBuf>, DailyLogError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DailyLogError::List {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        // Path::is_file follows symlinks; dangling links are not files.
        if entry.path().is_file() && has_log_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn count_log_files(dir: &Path) -> Result<usize, DailyLogError> {
    Ok(list_log_files(dir)?.len())
}

pub fn next_sequence_number(dir: &Path) -> Result<usize, DailyLogError> {
    Ok(count_log_files(dir)? + 1)
}

/// The log file already written for `date`, whatever day number it carries.
pub fn find_log_for_date(files: &[PathBuf], date: NaiveDate) -> Option<&Path> {
    let suffix = format!("_{}.{}", date.format(DATE_FORMAT), LOG_EXTENSION);
    files
        .iter()
        .map(PathBuf::as_path)
        .find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(&suffix))
        })
}

pub fn log_file_name(sequence: usize, date: NaiveDate) -> String {
    format!(
        "Day-{}_{}.{}",
        sequence,
        date.format(DATE_FORMAT),
        LOG_EXTENSION
    )
}

pub fn render_log(sequence: usize, date: NaiveDate) -> String {
    let mut content = format!("--- Daily Log: Day-{} ---\n", sequence);
    content.push_str(&format!("Date: {}\n", date.format(DATE_FORMAT)));
    content.push_str("Status: Log created automatically.\n");
    content
}

fn has_log_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(LOG_EXTENSION)
}

// Fails with AlreadyExists if something took the name after the existence check.
fn write_new_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

fn write_new_file_atomic(dir: &Path, dest: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(".daycount-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist_noclobber(dest).map_err(|e| e.error)?;
    Ok(())
}
