//! Logging configuration from TOML (`[logging]` section)

use logswitch_domain::{BackendKind, ConfigError, LogConfig};
use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
///
/// Values stay as strings so that bad entries surface as [`ConfigError`]s
/// from [`FileLoggingConfig::validate`] instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// structured | null (aliases: logrus, none)
    pub backend: String,
    /// debug | info | error (empty = backend default)
    pub log_level: String,
    /// json | text (empty = backend default)
    pub out_format: String,
    /// Log file path (empty = stdout)
    pub outfile: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Structured.name().to_string(),
            log_level: String::new(),
            out_format: String::new(),
            outfile: String::new(),
        }
    }
}

impl FileLoggingConfig {
    pub fn backend(&self) -> Result<BackendKind, ConfigError> {
        self.backend.parse()
    }

    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::new(&self.log_level, &self.out_format, &self.outfile)
    }

    /// Check every set value, returning all problems found.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut issues = Vec::new();
        let config = self.to_log_config();

        if let Err(e) = self.backend() {
            issues.push(e);
        }
        if !config.log_level.trim().is_empty()
            && let Err(e) = config.parse_level()
        {
            issues.push(e);
        }
        if !config.out_format.trim().is_empty()
            && let Err(e) = config.parse_format()
        {
            issues.push(e);
        }

        issues
    }
}
