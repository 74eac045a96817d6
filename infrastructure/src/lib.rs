//! Infrastructure layer for logswitch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod filesystem;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLoggingConfig};
pub use filesystem::LocalFileSystem;
pub use logging::{DefaultBackendFactory, StructuredLogger};
