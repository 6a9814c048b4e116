//! Append timestamped text messages to a log file.
//!
//! Each [`MessageLogger::log_message`] call opens the destination in append
//! mode, writes one `YYYY-MM-DD HH:MM:SS: <message>` line and closes it.

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod runner;

pub use config::{LoggerConfig, NewlinePolicy};
pub use entry::{LogEntry, TIMESTAMP_FORMAT};
pub use error::{LogError, Result};
pub use logger::MessageLogger;
