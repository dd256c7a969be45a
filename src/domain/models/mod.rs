pub mod config;
pub mod credential;

pub use config::{Config, EnvFileConfig, LogFormat, LoggingConfig};
pub use credential::{CredentialCheck, CredentialEntry, CredentialStatus, Service, SERVICES};
