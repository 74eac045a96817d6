//! Configuration file loading for logswitch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOGSWITCH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./logswitch.toml` or `./.logswitch.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/logswitch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileLoggingConfig};
pub use loader::{ConfigLoader, ENV_PREFIX};
