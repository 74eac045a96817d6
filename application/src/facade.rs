//! Log facade: selection of the active backend and leveled forwarding.
//!
//! [`LogFacade`] is a cheap-to-clone handle. Clones share the same active
//! backend, so one facade can be built at startup and injected wherever
//! logging is needed.
//!
//! Selection replaces the backend wholesale; a backend is never mutated by the
//! facade except through an explicit [`LogFacade::configure`].

use crate::ports::backend_factory::BackendFactory;
use crate::ports::logger::{Logger, NullLogger};
use logswitch_domain::{BackendKind, CallSite, Field, Level, LogConfig, LogError};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Shared handle to the active logging backend.
#[derive(Clone)]
pub struct LogFacade {
    active: Arc<RwLock<Arc<dyn Logger>>>,
    factory: Arc<dyn BackendFactory>,
}

impl std::fmt::Debug for LogFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFacade")
            .field("active", &self.client().name())
            .finish()
    }
}

impl LogFacade {
    /// Create a facade whose active backend is the [`NullLogger`].
    pub fn new(factory: Arc<dyn BackendFactory>) -> Self {
        Self {
            active: Arc::new(RwLock::new(Arc::new(NullLogger))),
            factory,
        }
    }

    /// Start with an already-built backend instead of the null one.
    pub fn with_logger(self, logger: Arc<dyn Logger>) -> Self {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = logger;
        self
    }

    /// Build a backend without touching the active one.
    pub fn new_client(
        &self,
        kind: BackendKind,
        config: Option<&LogConfig>,
    ) -> Result<Arc<dyn Logger>, LogError> {
        self.factory.create(kind, config)
    }

    /// Build a backend and make it the active one.
    ///
    /// Selecting the backend that is already active does nothing: no file is
    /// reopened and `config` is ignored. On failure the previous backend stays
    /// active.
    pub fn set_client(&self, kind: BackendKind, config: Option<&LogConfig>) -> Result<(), LogError> {
        if self.client().name() == kind.name() {
            debug!(backend = kind.name(), "Backend already active, skipping selection");
            return Ok(());
        }

        // Built without holding the lock: construction may log through this facade.
        let logger = self.factory.create(kind, config)?;

        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if active.name() == kind.name() {
            debug!(backend = kind.name(), "Backend selected concurrently, dropping new instance");
            return Ok(());
        }
        debug!(
            from = active.name(),
            to = kind.name(),
            path = ?logger.path(),
            "Switched active logger"
        );
        *active = logger;
        Ok(())
    }

    /// [`set_client`](Self::set_client) with a backend name such as
    /// `"structured"` or `"none"`. Unknown names are a configuration error.
    pub fn set_client_named(&self, name: &str, config: Option<&LogConfig>) -> Result<(), LogError> {
        let kind: BackendKind = name.parse()?;
        self.set_client(kind, config)
    }

    /// The active backend.
    pub fn client(&self) -> Arc<dyn Logger> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reconfigure the active backend from primitive settings.
    pub fn configure(&self, level: &str, format: &str, outfile: &str) -> Result<(), LogError> {
        self.client()
            .configure(&LogConfig::new(level, format, outfile))
    }

    // ==================== Leveled forwarding ====================

    #[track_caller]
    pub fn debug(&self, message: &str, fields: &[Field]) {
        self.client()
            .log(Level::Debug, message, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn info(&self, message: &str, fields: &[Field]) {
        self.client()
            .log(Level::Info, message, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn error(&self, message: &str, fields: &[Field]) {
        self.client()
            .log(Level::Error, message, fields, &CallSite::caller());
    }

    /// Forward a fatal record. The structured backend exits the process
    /// after writing it.
    #[track_caller]
    pub fn fatal(&self, message: &str, fields: &[Field]) {
        self.client()
            .log(Level::Fatal, message, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn debug_lines(&self, messages: &[&str], fields: &[Field]) {
        self.client()
            .log_lines(Level::Debug, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn info_lines(&self, messages: &[&str], fields: &[Field]) {
        self.client()
            .log_lines(Level::Info, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn error_lines(&self, messages: &[&str], fields: &[Field]) {
        self.client()
            .log_lines(Level::Error, messages, fields, &CallSite::caller());
    }

    #[track_caller]
    pub fn fatal_lines(&self, messages: &[&str], fields: &[Field]) {
        self.client()
            .log_lines(Level::Fatal, messages, fields, &CallSite::caller());
    }
}
