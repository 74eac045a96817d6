//! Process-wide facade for code that cannot be handed a [`LogFacade`].
//!
//! Until [`install`] is called, the free functions here behave like the null
//! backend and drop every record.

use crate::facade::LogFacade;
use logswitch_domain::Field;
use std::sync::OnceLock;

static FACADE: OnceLock<LogFacade> = OnceLock::new();

/// Install the process-wide facade. Returns `false` if one was already set.
pub fn install(facade: LogFacade) -> bool {
    FACADE.set(facade).is_ok()
}

/// The installed facade, if any.
pub fn facade() -> Option<&'static LogFacade> {
    FACADE.get()
}

#[track_caller]
pub fn debug(message: &str, fields: &[Field]) {
    if let Some(facade) = FACADE.get() {
        facade.debug(message, fields);
    }
}

#[track_caller]
pub fn info(message: &str, fields: &[Field]) {
    if let Some(facade) = FACADE.get() {
        facade.info(message, fields);
    }
}

#[track_caller]
pub fn error(message: &str, fields: &[Field]) {
    if let Some(facade) = FACADE.get() {
        facade.error(message, fields);
    }
}

#[track_caller]
pub fn fatal(message: &str, fields: &[Field]) {
    if let Some(facade) = FACADE.get() {
        facade.fatal(message, fields);
    }
}
