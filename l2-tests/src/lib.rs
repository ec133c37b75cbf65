//! Shared helpers for the end-to-end scenarios in `tests/`.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// The `daycount` binary, run in `dir`, isolated from CI and daycount env vars on the host.
pub fn daycount_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daycount").unwrap();
    cmd.current_dir(dir)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("DAYCOUNT_DIR")
        .env_remove("DAYCOUNT_CONFIG");
    cmd
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
