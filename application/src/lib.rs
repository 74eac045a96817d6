//! Application layer for logswitch
//!
//! This crate contains the logger ports and the facade that selects and
//! forwards to the active backend. It depends only on the domain layer.

pub mod facade;
pub mod global;
pub mod ports;

// Re-export commonly used types
pub use facade::LogFacade;
pub use ports::{
    backend_factory::BackendFactory,
    file_system::FileSystem,
    logger::{Logger, NullLogger},
};
