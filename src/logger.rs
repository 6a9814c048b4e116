use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::config::{LoggerConfig, NewlinePolicy};
use crate::entry::LogEntry;
use crate::error::{LogError, Result};

/// Appends timestamped lines to a single destination file.
///
/// The file is opened and closed on every call; no handle outlives
/// [`MessageLogger::log_message`]. Concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct MessageLogger {
    config: LoggerConfig,
}

impl MessageLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn destination(&self) -> &Path {
        &self.config.destination_path
    }

    /// Appends `<now>: <message>\n` using the local wall clock.
    pub fn log_message(&self, message: &str) -> Result<()> {
        self.log_message_at(Local::now().naive_local(), message)
    }

    pub fn log_message_at(&self, timestamp: NaiveDateTime, message: &str) -> Result<()> {
        if self.config.newline_policy == NewlinePolicy::Reject && message.contains(['\n', '\r']) {
            return Err(LogError::InvalidMessage(format!(
                "line break in message {message:?}"
            )));
        }

        let line = LogEntry::new(timestamp, message).to_line();
        let path = self.destination();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::DestinationUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        // One buffer per entry so O_APPEND places it contiguously.
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| LogError::WriteFailure {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), bytes = line.len(), "appended log entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MessageLogger;
    use crate::config::{LoggerConfig, NewlinePolicy};
    use crate::entry::LogEntry;
    use crate::error::LogError;
    use chrono::NaiveDate;
    use std::fs;

    fn logger_in(dir: &tempfile::TempDir) -> MessageLogger {
        MessageLogger::new(LoggerConfig::new(dir.path().join("debug.txt")))
    }

    fn is_timestamped(line: &str) -> bool {
        let b = line.as_bytes();
        b.len() >= 21
            && b[..19].iter().enumerate().all(|(i, c)| match i {
                4 | 7 => *c == b'-',
                10 => *c == b' ',
                13 | 16 => *c == b':',
                _ => c.is_ascii_digit(),
            })
            && &line[19..21] == ": "
    }

    #[test]
    fn creates_file_and_appends_one_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = logger_in(&dir);

        logger.log_message("this is a message").expect("log");

        let contents = fs::read_to_string(logger.destination()).expect("read");
        assert!(contents.ends_with(": this is a message\n"));
        assert_eq!(contents.lines().count(), 1);
        assert!(is_timestamped(&contents));
    }

    #[test]
    fn appends_in_call_order_without_touching_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = logger_in(&dir);
        fs::write(logger.destination(), "pre-existing\n").expect("seed");

        let messages = ["first", "", "third: with colon", "fourth"];
        for m in messages {
            logger.log_message(m).expect("log");
        }

        let contents = fs::read_to_string(logger.destination()).expect("read");
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("pre-existing"));
        let recovered: Vec<String> = lines
            .map(|l| LogEntry::parse_line(l).expect("parse").message)
            .collect();
        assert_eq!(recovered, messages);
    }

    #[test]
    fn uses_supplied_timestamp() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = logger_in(&dir);
        let ts = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();

        logger.log_message_at(ts, "second message").expect("log");

        let contents = fs::read_to_string(logger.destination()).expect("read");
        assert_eq!(contents, "1999-12-31 23:59:58: second message\n");
    }

    #[test]
    fn embedded_newline_written_verbatim_by_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = logger_in(&dir);

        logger.log_message("one\ntwo").expect("log");

        let contents = fs::read_to_string(logger.destination()).expect("read");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": one"));
        assert_eq!(lines[1], "two");
    }

    #[test]
    fn embedded_newline_rejected_under_reject_policy() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = MessageLogger::new(
            LoggerConfig::new(dir.path().join("debug.txt"))
                .with_newline_policy(NewlinePolicy::Reject),
        );

        let err = logger.log_message("one\r\ntwo").unwrap_err();
        assert!(matches!(err, LogError::InvalidMessage(_)));
        assert!(!logger.destination().exists());

        logger.log_message("fine").expect("log");
        assert!(logger.destination().exists());
    }

    #[test]
    fn missing_parent_directory_is_destination_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger =
            MessageLogger::new(LoggerConfig::new(dir.path().join("no/such/dir/debug.txt")));

        let err = logger.log_message("x").unwrap_err();
        assert!(matches!(err, LogError::DestinationUnavailable { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_is_write_failure() {
        let logger = MessageLogger::new(LoggerConfig::new("/dev/full"));

        let err = logger.log_message("x").unwrap_err();
        assert!(matches!(err, LogError::WriteFailure { .. }), "got {err:?}");
    }

    #[test]
    fn carriage_return_survives_read_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = logger_in(&dir);

        logger.log_message("ends with cr\r").expect("log");

        let contents = fs::read_to_string(logger.destination()).expect("read");
        let entry = LogEntry::parse_line(&contents).expect("parse");
        assert_eq!(entry.message, "ends with cr\r");
    }

    #[test]
    fn directory_as_destination_is_destination_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let logger = MessageLogger::new(LoggerConfig::new(dir.path()));

        let err = logger.log_message("x").unwrap_err();
        assert!(matches!(err, LogError::DestinationUnavailable { .. }));
    }
}
