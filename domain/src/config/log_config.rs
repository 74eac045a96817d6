//! Logger configuration value object

use super::out_format::{LogLevel, OutFormat};
use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logger settings. An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// debug | info | error
    pub log_level: String,
    /// json | text
    pub out_format: String,
    /// Path to the log file. Empty sends output to stdout.
    pub outfile: String,
}

impl LogConfig {
    pub fn new(
        log_level: impl Into<String>,
        out_format: impl Into<String>,
        outfile: impl Into<String>,
    ) -> Self {
        Self {
            log_level: log_level.into(),
            out_format: out_format.into(),
            outfile: outfile.into(),
        }
    }

    /// Defaults of the structured backend: `info`, `text`, stdout.
    pub fn structured_defaults() -> Self {
        Self::new(LogLevel::default().as_str(), OutFormat::default().as_str(), "")
    }

    /// Overlay `other` on top of `self`.
    ///
    /// Non-empty fields of `other` win; empty ones keep the value from `self`.
    pub fn update(&self, other: &LogConfig) -> LogConfig {
        fn pick(base: &str, over: &str) -> String {
            let value = if over.is_empty() { base } else { over };
            value.to_string()
        }

        LogConfig {
            log_level: pick(&self.log_level, &other.log_level),
            out_format: pick(&self.out_format, &other.out_format),
            outfile: pick(&self.outfile, &other.outfile),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.log_level.is_empty() && self.out_format.is_empty() && self.outfile.is_empty()
    }

    pub fn parse_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level.parse()
    }

    pub fn parse_format(&self) -> Result<OutFormat, ConfigError> {
        self.out_format.parse()
    }

    /// Trimmed output path, `None` when output goes to stdout.
    pub fn outfile_path(&self) -> Option<PathBuf> {
        let trimmed = self.outfile.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
