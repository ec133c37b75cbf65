use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use daycount_core::config::DEFAULT_CONFIG_FILE;
use daycount_core::{DailyLogConfig, DailyLogWriter, RunLogger, WriteMode};
use std::io;
use std::path::{Path, PathBuf};

mod signal;

/// Writes today's numbered log file into the log directory, once per day.
///
/// Exits 0 when a new file was written and 1 otherwise.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory that holds the daily log files [default: daily_logs]
    #[arg(long, env = "DAYCOUNT_DIR")]
    dir: Option<PathBuf>,
    /// JSON config file (./daycount.json is used when present)
    #[arg(long, env = "DAYCOUNT_CONFIG")]
    config: Option<PathBuf>,
    /// Date to log for, as YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Write through a temp file and move it into place
    #[arg(long)]
    atomic: bool,
    /// Also append timestamped run messages to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", s, e))
}

fn main() {
    let ci = signal::CiEnv::from_env();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version requests are not failures.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            publish_signal(&ci, false);
            std::process::exit(1);
        }
    };

    let (config, mut logger) = match prepare(&cli) {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            publish_signal(&ci, false);
            std::process::exit(1);
        }
    };

    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let result = DailyLogWriter::new(config).run(today, &mut logger);

    publish_signal(&ci, result.has_changed());
    std::process::exit(result.exit_code());
}

fn prepare(cli: &Cli) -> Result<(DailyLogConfig, RunLogger)> {
    let config = resolve_config(cli)?;
    let logger = match &cli.log_file {
        Some(path) => RunLogger::stdio()
            .with_file(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?,
        None => RunLogger::stdio(),
    };
    Ok((config, logger))
}

/// Flags and env vars win over the config file, which wins over the defaults.
fn resolve_config(cli: &Cli) -> Result<DailyLogConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                load_config(implicit)?
            } else {
                DailyLogConfig::default()
            }
        }
    };

    if let Some(dir) = &cli.dir {
        config.directory = dir.clone();
    }
    if cli.atomic {
        config.write_mode = WriteMode::Atomic;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<DailyLogConfig> {
    DailyLogConfig::load(path)
        .with_context(|| format!("Failed to load config file {}", path.display()))
}

fn publish_signal(ci: &signal::CiEnv, changed: bool) {
    if let Err(e) = ci.publish(changed, &mut io::stdout()) {
        eprintln!(
            "{} Could not publish {} signal - {}",
            "Warning:".yellow().bold(),
            signal::OUTPUT_NAME,
            e
        );
    }
}
