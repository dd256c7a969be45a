//! Startup credential report.
//!
//! The reporter takes an already-captured [`EnvSource`] and produces a
//! [`StartupReport`]: the runtime version line plus one status per service
//! in [`SERVICES`](crate::domain::models::SERVICES) order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::domain::models::{CredentialCheck, CredentialStatus, Service};
use crate::domain::ports::EnvSource;
use crate::infrastructure::runtime::RuntimeInfo;

/// Status line for one service. Never carries the credential value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service: String,
    pub env_var: String,
    pub status: CredentialStatus,
}

impl ServiceStatus {
    fn new(service: Service, status: CredentialStatus) -> Self {
        Self {
            service: service.name.to_string(),
            env_var: service.env_var.to_string(),
            status,
        }
    }
}

/// Result of one startup check.
#[derive(Debug, Clone, Serialize)]
pub struct StartupReport {
    pub runtime: RuntimeInfo,
    pub checked_at: DateTime<Utc>,
    pub env_files: Vec<PathBuf>,
    pub services: Vec<ServiceStatus>,
    pub configured: usize,
    pub total: usize,
}

/// Builds [`StartupReport`]s.
#[derive(Debug, Clone)]
pub struct StartupReporter {
    runtime: RuntimeInfo,
    env_files: Vec<PathBuf>,
}

impl StartupReporter {
    pub fn new(runtime: RuntimeInfo) -> Self {
        Self {
            runtime,
            env_files: Vec::new(),
        }
    }

    /// Record which `.env` files contributed to the environment.
    #[must_use]
    pub fn with_env_files(mut self, files: Vec<PathBuf>) -> Self {
        self.env_files = files;
        self
    }

    /// Check every service against `source`.
    #[instrument(skip_all)]
    pub fn check(&self, source: &dyn EnvSource) -> StartupReport {
        let check = CredentialCheck::from_source(source);

        let services: Vec<ServiceStatus> = check
            .entries()
            .iter()
            .map(|entry| {
                debug!(service = entry.service().name, status = %entry.status(), "credential checked");
                ServiceStatus::new(entry.service(), entry.status())
            })
            .collect();

        let report = StartupReport {
            runtime: self.runtime.clone(),
            checked_at: Utc::now(),
            env_files: self.env_files.clone(),
            configured: check.configured_count(),
            total: check.total(),
            services,
        };

        info!(
            configured = report.configured,
            total = report.total,
            "startup check complete"
        );

        report
    }
}
