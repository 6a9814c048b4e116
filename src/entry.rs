use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::{LogError, Result};

/// strftime pattern for the timestamp prefix, e.g. `2024-03-07 14:05:09`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_LEN: usize = "YYYY-MM-DD HH:MM:SS".len();
const SEPARATOR: &str = ": ";

/// One record of the destination file: `<timestamp>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl LogEntry {
    pub fn new(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// The full line as written to disk, trailing newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }

    /// Parses one physical line. A single trailing `\n` is ignored; anything
    /// else, `\r` included, belongs to the message.
    pub fn parse_line(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);

        if line.len() < TIMESTAMP_LEN + SEPARATOR.len() || !line.is_char_boundary(TIMESTAMP_LEN) {
            return Err(LogError::MalformedLine(line.to_string()));
        }

        let (stamp, rest) = line.split_at(TIMESTAMP_LEN);
        let message = rest
            .strip_prefix(SEPARATOR)
            .ok_or_else(|| LogError::MalformedLine(line.to_string()))?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .map_err(|_| LogError::MalformedLine(line.to_string()))?;

        Ok(Self::new(timestamp, message))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

impl FromStr for LogEntry {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_line(s)
    }
}
