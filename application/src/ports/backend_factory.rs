//! Backend construction port
//!
//! Infrastructure owns the concrete backends; the facade only knows how to ask
//! for one by [`BackendKind`].

use super::logger::Logger;
use logswitch_domain::{BackendKind, LogConfig, LogError};
use std::sync::Arc;

/// Builds a configured backend for a given kind.
pub trait BackendFactory: Send + Sync {
    /// `config` of `None` means the backend's defaults.
    fn create(
        &self,
        kind: BackendKind,
        config: Option<&LogConfig>,
    ) -> Result<Arc<dyn Logger>, LogError>;
}
