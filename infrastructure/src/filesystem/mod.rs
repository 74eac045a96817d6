//! Filesystem adapters.

mod local;

pub use local::{LOG_FILE_MODE, LocalFileSystem};
