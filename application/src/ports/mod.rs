//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod backend_factory;
pub mod file_system;
pub mod logger;
