//! keycheck - startup credential check
//!
//! Loads the process environment (optionally merged from `.env` files) and
//! reports which external API credentials are present. Only presence is
//! checked; values are never validated, logged or printed.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): credential model, configuration types, ports
//! - **Service Layer** (`services`): the startup reporter
//! - **Infrastructure Layer** (`infrastructure`): environment, config, logging
//! - **CLI Layer** (`cli`): argument parsing and output
//!
//! # Example
//!
//! ```
//! use keycheck::{CredentialStatus, EnvSnapshot, RuntimeInfo, StartupReporter};
//!
//! let env: EnvSnapshot = [("OPENAI_API_KEY", "sk-test")].into_iter().collect();
//! let report = StartupReporter::new(RuntimeInfo::current()).check(&env);
//! assert_eq!(report.services[0].service, "OpenAI");
//! assert_eq!(report.services[0].status, CredentialStatus::Configured);
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, CredentialCheck, CredentialStatus, EnvFileConfig, LogFormat, LoggingConfig, Service,
    SERVICES,
};
pub use domain::ports::EnvSource;
pub use domain::StartupError;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::env::{EnvFileLoader, EnvSnapshot};
pub use infrastructure::runtime::RuntimeInfo;
pub use services::{ServiceStatus, StartupReport, StartupReporter};
