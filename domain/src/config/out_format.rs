//! Output format and threshold level value objects

use crate::core::error::ConfigError;
use crate::record::Level;
use serde::{Deserialize, Serialize};

/// How records are rendered by the structured backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutFormat {
    /// One JSON object per line
    Json,
    /// Timestamped `key=value` line (default)
    Text,
}

impl Default for OutFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl OutFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutFormat::Json => "json",
            OutFormat::Text => "text",
        }
    }
}

impl std::str::FromStr for OutFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "json" => Ok(OutFormat::Json),
            "text" => Ok(OutFormat::Text),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Minimum severity a backend lets through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    /// Whether a record at `level` passes this threshold
    pub fn allows(&self, level: Level) -> bool {
        let threshold = match self {
            LogLevel::Debug => Level::Debug,
            LogLevel::Info => Level::Info,
            LogLevel::Error => Level::Error,
        };
        level >= threshold
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ConfigError::MissingLevel),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::UnknownLevel(other.to_string())),
        }
    }
}
