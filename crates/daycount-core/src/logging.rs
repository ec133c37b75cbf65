//! Console logger for a run, with an optional timestamped file sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub struct RunLogger {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    file: Option<File>,
}

impl RunLogger {
    /// Info lines go to stdout, error lines to stderr.
    pub fn stdio() -> Self {
        RunLogger {
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            file: None,
        }
    }

    /// Discards every message. Mostly useful in tests.
    pub fn silent() -> Self {
        RunLogger {
            out: Box::new(io::sink()),
            err: Box::new(io::sink()),
            file: None,
        }
    }

    /// Also appends every message, timestamped, to `path`.
    pub fn with_file(mut self, path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        self.file = Some(file);
        Ok(self)
    }

    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
        self.log_to_file("INFO", message);
    }

    pub fn error(&mut self, message: &str) {
        let _ = writeln!(self.err, "{}", message);
        self.log_to_file("ERROR", message);
    }

    fn log_to_file(&mut self, level: &str, message: &str) {
        if let Some(file) = self.file.as_mut() {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} {}", timestamp, level, message);
        }
    }
}
