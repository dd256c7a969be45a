//! Status coloring for CLI output.
//!
//! Styling goes through `console`, which drops ANSI codes when stdout is not
//! a terminal. `NO_COLOR` is honored via [`apply_color_preference`].

use console::{style, StyledObject};

use crate::domain::models::CredentialStatus;
use crate::domain::ports::EnvSource;

/// Marker and label for a credential status, e.g. `[OK] Configured`.
pub fn status_label(status: CredentialStatus) -> &'static str {
    match status {
        CredentialStatus::Configured => "[OK] Configured",
        CredentialStatus::NotConfigured => "[--] Not configured",
    }
}

/// Configured = green, not configured = dim.
pub fn colorize_status(status: CredentialStatus) -> StyledObject<&'static str> {
    let label = status_label(status);
    match status {
        CredentialStatus::Configured => style(label).green(),
        CredentialStatus::NotConfigured => style(label).dim(),
    }
}

/// Section header, bold.
pub fn section_header(title: &str) -> String {
    style(title).bold().to_string()
}

/// Disable colors when `NO_COLOR` is set to anything non-empty.
pub fn apply_color_preference(env: &dyn EnvSource) {
    if env.get("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        console::set_colors_enabled(false);
    }
}
