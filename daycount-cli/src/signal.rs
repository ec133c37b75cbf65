//! Publishes the `has_changed` flag to a CI runner.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

pub const OUTPUT_NAME: &str = "has_changed";

#[derive(Debug, Default)]
pub struct CiEnv {
    /// File named by `GITHUB_OUTPUT`, if set.
    pub github_output: Option<PathBuf>,
    /// Whether `GITHUB_ACTIONS` is set to a non-empty value.
    pub github_actions: bool,
}

impl CiEnv {
    pub fn from_env() -> Self {
        CiEnv {
            github_output: env::var_os("GITHUB_OUTPUT")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            github_actions: env::var_os("GITHUB_ACTIONS").is_some_and(|v| !v.is_empty()),
        }
    }

    /// Appends `has_changed=<bool>` to the output file, or falls back to the
    /// legacy `::set-output` command on `stdout`. Outside CI it does nothing.
    pub fn publish(&self, changed: bool, stdout: &mut dyn Write) -> io::Result<()> {
        if let Some(path) = &self.github_output {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}={}", OUTPUT_NAME, changed)?;
        } else if self.github_actions {
            writeln!(stdout, "::set-output name={}::{}", OUTPUT_NAME, changed)?;
        }
        Ok(())
    }
}
