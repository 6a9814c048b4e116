use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LogError, Result};

pub const DEFAULT_DESTINATION: &str = "debug.txt";

/// What to do with a message that contains a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlinePolicy {
    /// Write it as-is; one call then spans several physical lines.
    #[default]
    Verbatim,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub destination_path: PathBuf,
    pub newline_policy: NewlinePolicy,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            destination_path: PathBuf::from(DEFAULT_DESTINATION),
            newline_policy: NewlinePolicy::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new(destination_path: impl Into<PathBuf>) -> Self {
        Self {
            destination_path: destination_path.into(),
            ..Self::default()
        }
    }

    pub fn with_newline_policy(mut self, policy: NewlinePolicy) -> Self {
        self.newline_policy = policy;
        self
    }

    /// Reads a TOML config file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_error = |message: String| LogError::Config {
            path: path.to_path_buf(),
            message,
        };
        let contents = fs::read_to_string(path).map_err(|err| config_error(err.to_string()))?;
        Self::from_toml(&contents).map_err(|err| config_error(err.to_string()))
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
