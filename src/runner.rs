use tracing::warn;

use crate::cli::Cli;
use crate::error::{LogError, Result};
use crate::logger::MessageLogger;

pub struct RunResult {
    pub written: usize,
    pub failures: Vec<LogError>,
}

impl RunResult {
    pub fn all_written(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Logs every message from `cli`, continuing past individual failures.
///
/// Only configuration problems are returned as `Err`; write failures are
/// collected so the caller can choose the exit status.
pub fn run_messages(cli: &Cli) -> Result<RunResult> {
    let logger = MessageLogger::new(cli.resolve_config()?);

    let mut result = RunResult {
        written: 0,
        failures: Vec::new(),
    };
    for message in cli.messages() {
        match logger.log_message(message) {
            Ok(()) => result.written += 1,
            Err(err) => {
                warn!(%err, "message not logged");
                result.failures.push(err);
            }
        }
    }
    Ok(result)
}
