//! `FileSystem` adapter over the local disk.

use logswitch_application::FileSystem;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Permission bits for newly created log files (before umask).
pub const LOG_FILE_MODE: u32 = 0o664;

/// Local disk implementation of the [`FileSystem`] port.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn dir_exists(&self, dir: &Path) -> io::Result<bool> {
        match std::fs::metadata(dir) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn open_append(&self, path: &Path) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(LOG_FILE_MODE);
        }

        options.open(path)
    }
}
