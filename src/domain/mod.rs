//! Domain layer for keycheck
//!
//! Credential model, configuration types and the ports the
//! infrastructure layer implements.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::StartupError;
