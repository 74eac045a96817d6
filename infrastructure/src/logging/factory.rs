//! Default [`BackendFactory`]: one constructor per [`BackendKind`].

use super::structured::StructuredLogger;
use crate::filesystem::LocalFileSystem;
use logswitch_application::{BackendFactory, FileSystem, Logger, NullLogger};
use logswitch_domain::{BackendKind, LogConfig, LogError};
use std::sync::Arc;

/// Builds the real backends, using the given filesystem for log files.
#[derive(Clone)]
pub struct DefaultBackendFactory {
    fs: Arc<dyn FileSystem>,
}

impl Default for DefaultBackendFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultBackendFactory {
    /// Factory backed by the local disk.
    pub fn new() -> Self {
        Self::with_file_system(Arc::new(LocalFileSystem))
    }

    pub fn with_file_system(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl BackendFactory for DefaultBackendFactory {
    fn create(
        &self,
        kind: BackendKind,
        config: Option<&LogConfig>,
    ) -> Result<Arc<dyn Logger>, LogError> {
        match kind {
            BackendKind::Structured => Ok(Arc::new(StructuredLogger::new(config, self.fs.clone())?)),
            BackendKind::Null => Ok(Arc::new(NullLogger)),
        }
    }
}
