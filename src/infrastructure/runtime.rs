//! Build and runtime identification for the report's version line.

use serde::Serialize;
use std::fmt;

/// Versions of the running binary and the toolchain that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: String,
    pub rustc: String,
    pub target: String,
    pub os: String,
    pub arch: String,
}

impl RuntimeInfo {
    /// Information for this binary, captured at build time by `build.rs`.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            rustc: env!("KEYCHECK_RUSTC_VERSION").to_string(),
            target: env!("KEYCHECK_TARGET").to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

impl fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}/{})",
            self.name, self.version, self.rustc, self.os, self.arch
        )
    }
}
