//! Filesystem port
//!
//! The structured backend only needs two things from the filesystem: whether a
//! log file's parent directory exists, and an append handle to the log file.

use std::fs::File;
use std::io;
use std::path::Path;

/// Filesystem capability used when routing log output to a file.
pub trait FileSystem: Send + Sync {
    /// Whether `dir` exists and is a directory.
    fn dir_exists(&self, dir: &Path) -> io::Result<bool>;

    /// Open `path` for appending, creating it if missing.
    fn open_append(&self, path: &Path) -> io::Result<File>;
}
