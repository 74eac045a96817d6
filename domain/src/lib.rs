//! Domain layer for logswitch
//!
//! This crate contains the value objects every logger backend works with.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Field**: a named value attached to one log record
//! - **Level**: record severity (`debug` < `info` < `error` < `fatal`)
//! - **LogConfig**: level / format / output file settings, mergeable onto defaults
//! - **BackendKind**: the closed set of backends a facade can select
//! - **CallSite**: `pkg` / `src` metadata describing where a log call came from

pub mod config;
pub mod core;
pub mod record;

// Re-export commonly used types
pub use config::{BackendKind, LogConfig, LogLevel, OutFormat};
pub use crate::core::error::{ConfigError, LogError};
pub use record::{CallSite, Field, Level, err_field, f, mapify};
