//! Errors raised by the startup check's infrastructure.
//!
//! A missing credential is never an error; it is reported as
//! [`CredentialStatus::NotConfigured`](super::models::CredentialStatus).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
