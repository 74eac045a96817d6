//! Domain error types

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or unusable logging configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("please provide a log level. Legal values: debug, info, error")]
    MissingLevel,

    #[error("unknown log level: {0}. Legal values: debug, info, error")]
    UnknownLevel(String),

    #[error("unknown formatter {0:?}. Legal values: json, text")]
    UnknownFormat(String),

    #[error("unknown logging backend {0:?}. Legal values: structured, null")]
    UnknownBackend(String),

    #[error("unable to check if logfile parent directory {} exists: {source}", dir.display())]
    DirectoryCheck {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("log file parent directory does not exist, please create => {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Errors returned while building or configuring a logger
#[derive(Error, Debug)]
pub enum LogError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unable to open log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Check if this error comes from bad configuration rather than I/O
    pub fn is_config(&self) -> bool {
        matches!(self, LogError::Config(_))
    }

    /// The configuration error, if that is what this is
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            LogError::Config(e) => Some(e),
            LogError::Io { .. } => None,
        }
    }
}
