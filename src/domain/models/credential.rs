//! Credential presence model.
//!
//! A [`CredentialCheck`] is built once from an [`EnvSource`] snapshot and
//! records, for every entry in [`SERVICES`], whether a value was found.

use std::fmt;

use serde::Serialize;

use crate::domain::ports::EnvSource;

/// An external provider and the environment variable holding its API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Service {
    /// Display name, e.g. `OpenAI`
    pub name: &'static str,
    /// Lookup key, e.g. `OPENAI_API_KEY`
    pub env_var: &'static str,
}

impl Service {
    pub const fn new(name: &'static str, env_var: &'static str) -> Self {
        Self { name, env_var }
    }
}

/// Services checked at startup, in report order.
pub const SERVICES: &[Service] = &[
    Service::new("OpenAI", "OPENAI_API_KEY"),
    Service::new("Anthropic", "ANTHROPIC_API_KEY"),
    Service::new("Google", "GOOGLE_API_KEY"),
    Service::new("DeepSeek", "DEEPSEEK_API_KEY"),
];

/// Whether a credential was found for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Configured,
    NotConfigured,
}

impl CredentialStatus {
    /// Empty strings count as absent; anything else is present.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Configured,
            _ => Self::NotConfigured,
        }
    }

    pub const fn is_configured(self) -> bool {
        matches!(self, Self::Configured)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Configured => "configured",
            Self::NotConfigured => "not configured",
        }
    }
}

impl fmt::Display for CredentialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service and the value read for it.
#[derive(Clone)]
pub struct CredentialEntry {
    service: Service,
    value: Option<String>,
}

impl CredentialEntry {
    pub const fn service(&self) -> Service {
        self.service
    }

    pub fn status(&self) -> CredentialStatus {
        CredentialStatus::from_value(self.value.as_deref())
    }
}

// The raw value is never printed.
impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("service", &self.service.name)
            .field("status", &self.status())
            .finish()
    }
}

/// Presence of every credential in [`SERVICES`], in order.
#[derive(Debug, Clone)]
pub struct CredentialCheck {
    entries: Vec<CredentialEntry>,
}

impl CredentialCheck {
    /// Read each service's variable from `source`.
    pub fn from_source(source: &dyn EnvSource) -> Self {
        let entries = SERVICES
            .iter()
            .map(|service| CredentialEntry {
                service: *service,
                value: source.get(service.env_var),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    pub fn configured_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.status().is_configured())
            .count()
    }

    /// Number of services checked.
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::env::EnvSnapshot;

    #[test]
    fn test_services_order_is_fixed() {
        let names: Vec<_> = SERVICES.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["OpenAI", "Anthropic", "Google", "DeepSeek"]);

        let vars: Vec<_> = SERVICES.iter().map(|s| s.env_var).collect();
        assert_eq!(
            vars,
            vec![
                "OPENAI_API_KEY",
                "ANTHROPIC_API_KEY",
                "GOOGLE_API_KEY",
                "DEEPSEEK_API_KEY"
            ]
        );
    }

    #[test]
    fn test_status_from_value() {
        assert_eq!(CredentialStatus::from_value(None), CredentialStatus::NotConfigured);
        assert_eq!(CredentialStatus::from_value(Some("")), CredentialStatus::NotConfigured);
        assert_eq!(CredentialStatus::from_value(Some("sk-test")), CredentialStatus::Configured);
        assert_eq!(CredentialStatus::from_value(Some(" ")), CredentialStatus::Configured);
    }

    fn statuses(check: &CredentialCheck) -> Vec<(&'static str, CredentialStatus)> {
        check
            .entries()
            .iter()
            .map(|e| (e.service().name, e.status()))
            .collect()
    }

    #[test]
    fn test_only_openai_configured() {
        let env: EnvSnapshot = [("OPENAI_API_KEY", "sk-test")].into_iter().collect();
        let check = CredentialCheck::from_source(&env);

        assert_eq!(check.total(), 4);
        assert_eq!(
            statuses(&check),
            vec![
                ("OpenAI", CredentialStatus::Configured),
                ("Anthropic", CredentialStatus::NotConfigured),
                ("Google", CredentialStatus::NotConfigured),
                ("DeepSeek", CredentialStatus::NotConfigured),
            ]
        );
        assert_eq!(check.configured_count(), 1);
    }

    #[test]
    fn test_empty_environment() {
        let env = EnvSnapshot::default();
        let check = CredentialCheck::from_source(&env);

        assert_eq!(check.configured_count(), 0);
        assert!(check
            .entries()
            .iter()
            .all(|e| e.status() == CredentialStatus::NotConfigured));
    }

    #[test]
    fn test_empty_value_is_not_configured() {
        let env: EnvSnapshot = [("GOOGLE_API_KEY", "")].into_iter().collect();
        let check = CredentialCheck::from_source(&env);
        assert_eq!(check.entries()[2].service(), SERVICES[2]);
        assert_eq!(check.entries()[2].status(), CredentialStatus::NotConfigured);
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let env: EnvSnapshot = [("MISTRAL_API_KEY", "key")].into_iter().collect();
        let check = CredentialCheck::from_source(&env);
        assert_eq!(check.total(), SERVICES.len());
        assert_eq!(check.configured_count(), 0);
    }

    #[test]
    fn test_debug_hides_values() {
        let env: EnvSnapshot = [("ANTHROPIC_API_KEY", "sk-ant-supersecret")]
            .into_iter()
            .collect();
        let check = CredentialCheck::from_source(&env);
        let rendered = format!("{check:?}");

        assert!(!rendered.contains("sk-ant-supersecret"));
        assert!(rendered.contains("Anthropic"));
    }
}
