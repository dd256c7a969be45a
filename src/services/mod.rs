//! Service layer
//!
//! Coordinates domain models and infrastructure into the startup check.

pub mod startup_reporter;

pub use startup_reporter::{ServiceStatus, StartupReport, StartupReporter};
