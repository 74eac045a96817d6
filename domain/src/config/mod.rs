//! Configuration value objects for the domain layer
//!
//! These are the settings a logger backend is built from, shared by
//! every layer.

mod backend;
mod log_config;
mod out_format;

pub use backend::BackendKind;
pub use log_config::LogConfig;
pub use out_format::{LogLevel, OutFormat};
