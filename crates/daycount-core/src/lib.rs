//! Core of `daycount`: writes one sequentially numbered log file per day.
//!
//! The day number is derived, never stored: it is the count of `.txt` files
//! already in the log directory plus one. A second run on the same date finds
//! the file it would write and does nothing.

pub mod config;
pub mod error;
pub mod logging;
pub mod outcome;
pub mod writer;

pub use config::{DailyLogConfig, WriteMode};
pub use error::{DailyLogError, ErrorKind};
pub use logging::RunLogger;
pub use outcome::RunResult;
pub use writer::DailyLogWriter;
