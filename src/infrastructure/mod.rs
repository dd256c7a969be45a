//! Infrastructure layer module
//!
//! Adapters around the process and its surroundings:
//! - Environment snapshot and `.env` file loading
//! - Configuration management
//! - Logging infrastructure
//! - Runtime version information
//!
//! Implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
pub mod runtime;
