//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ConfigError`]: invalid logging configuration
//! - [`error::LogError`]: anything that can go wrong building a logger

pub mod error;
