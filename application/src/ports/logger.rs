//! Port for leveled, field-based logging backends.
//!
//! Defines the [`Logger`] trait every backend implements, plus the
//! [`NullLogger`] used when logging is disabled.
//!
//! The required surface is small: identity (`name`, `path`), `configure`,
//! and a single `log` entry point taking an already-resolved [`CallSite`].
//! The leveled helpers (`debug`, `info`, ...) are provided methods that
//! resolve the caller's location and forward to `log`.

use logswitch_domain::{CallSite, Field, Level, LogConfig, LogError};
use std::path::PathBuf;

/// Port for a logging backend.
///
/// `log` is synchronous and non-fallible: backends swallow their own
/// write errors so that logging never disrupts the caller.
pub trait Logger: Send + Sync {
    /// Stable backend identifier, used to skip redundant re-selection.
    fn name(&self) -> &'static str;

    /// File the backend writes to, `None` when not writing to a file.
    fn path(&self) -> Option<PathBuf>;

    /// Apply new settings.
    fn configure(&self, config: &LogConfig) -> Result<(), LogError>;

    /// Emit one record.
    fn log(&self, level: Level, message: &str, fields: &[Field], site: &CallSite);

    /// Emit each message as its own record, sharing `fields` and `site`.
    fn log_lines(&self, level: Level, messages: &[&str], fields: &[Field], site: &CallSite) {
        for message in messages {
            self.log(level, message, fields, site);
        }
    }

    // ==================== Leveled helpers ====================

    #[track_caller]
    fn debug(&self, message: &str, fields: &[Field]) {
        self.log(Level::Debug, message, fields, &CallSite::caller());
    }

    #[track_caller]
    fn info(&self, message: &str, fields: &[Field]) {
        self.log(Level::Info, message, fields, &CallSite::caller());
    }

    #[track_caller]
    fn error(&self, message: &str, fields: &[Field]) {
        self.log(Level::Error, message, fields, &CallSite::caller());
    }

    /// Log at fatal level. Backends that honour it terminate the process.
    #[track_caller]
    fn fatal(&self, message: &str, fields: &[Field]) {
        self.log(Level::Fatal, message, fields, &CallSite::caller());
    }

    // ==================== Multi-line helpers ====================
    //
    // The call site is resolved once and shared by every line.

    #[track_caller]
    fn debug_lines(&self, messages: &[&str], fields: &[Field]) {
        self.log_lines(Level::Debug, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    fn info_lines(&self, messages: &[&str], fields: &[Field]) {
        self.log_lines(Level::Info, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    fn error_lines(&self, messages: &[&str], fields: &[Field]) {
        self.log_lines(Level::Error, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    fn fatal_lines(&self, messages: &[&str], fields: &[Field]) {
        self.log_lines(Level::Fatal, messages, fields, &CallSite::caller());
    }
}

/// No-op backend for tests and when logging is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl NullLogger {
    pub const NAME: &'static str = "null";
}

impl Logger for NullLogger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn path(&self) -> Option<PathBuf> {
        None
    }

    fn configure(&self, _config: &LogConfig) -> Result<(), LogError> {
        Ok(())
    }

    fn log(&self, _level: Level, _message: &str, _fields: &[Field], _site: &CallSite) {}

    fn log_lines(&self, _level: Level, _messages: &[&str], _fields: &[Field], _site: &CallSite) {}
}
