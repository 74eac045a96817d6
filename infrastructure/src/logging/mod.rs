//! Logging infrastructure: the structured backend and its building blocks.
//!
//! Provides [`StructuredLogger`], which implements the
//! [`Logger`](logswitch_application::Logger) port, and the
//! [`DefaultBackendFactory`] that builds backends by [`BackendKind`].
//!
//! [`BackendKind`]: logswitch_domain::BackendKind

mod destination;
mod factory;
mod format;
mod structured;

pub use destination::Destination;
pub use factory::DefaultBackendFactory;
pub use format::{
    Formatter, JsonFormatter, Record, TEXT_TIMESTAMP_FORMAT, TextFormatter, formatter_for,
};
pub use structured::{ExitHandler, FATAL_EXIT_CODE, StructuredLogger};
