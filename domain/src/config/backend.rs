//! Backend selector

use crate::core::error::ConfigError;

/// The closed set of logger backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Field-based leveled logging to stdout or a file
    Structured,
    /// Discards everything
    Null,
}

impl BackendKind {
    /// Stable identifier reported by the backend's `name()`
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Structured => "structured",
            BackendKind::Null => "null",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "logrus" => Ok(BackendKind::Structured),
            "null" | "none" => Ok(BackendKind::Null),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}
