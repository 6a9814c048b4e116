use std::path::PathBuf;

use clap::Parser;

use crate::config::{LoggerConfig, NewlinePolicy};
use crate::error::Result;

pub const DEMO_MESSAGES: [&str; 2] = ["this is a message", "second message"];

#[derive(Parser, Debug)]
#[command(
    name = "debug-log",
    version,
    about = "Append timestamped messages to a log file"
)]
pub struct Cli {
    /// File to append to; overrides the config file.
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// TOML file with `destination_path` and `newline_policy`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Refuse messages containing a line break.
    #[arg(long)]
    pub reject_newlines: bool,

    /// Exit non-zero when any message could not be written.
    #[arg(long)]
    pub strict: bool,

    /// Messages to log; the two demo messages when omitted.
    pub messages: Vec<String>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)?,
            None => LoggerConfig::default(),
        };
        if let Some(dest) = &self.destination {
            config.destination_path = dest.clone();
        }
        if self.reject_newlines {
            config.newline_policy = NewlinePolicy::Reject;
        }
        Ok(config)
    }

    pub fn messages(&self) -> Vec<&str> {
        if self.messages.is_empty() {
            DEMO_MESSAGES.to_vec()
        } else {
            self.messages.iter().map(String::as_str).collect()
        }
    }
}
