//! Endpoint configuration for the external collaborators.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed per-request timeout applied to every collaborator call. Timeouts
/// surface through the same failure path as transport errors.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Public national registry used when no internal backend is configured.
pub const PUBLIC_REGISTRY_URL: &str = "https://publica.cnpj.ws";

/// One HTTP collaborator endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Endpoint of the public national registry.
    pub fn public_registry() -> Self {
        Self::new(PUBLIC_REGISTRY_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_missing_from_config_file() {
        let config: EndpointConfig =
            serde_json::from_str(r#"{"base_url": "https://backend.example"}"#).unwrap();
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn explicit_timeout_is_honored() {
        let config: EndpointConfig =
            serde_json::from_str(r#"{"base_url": "https://backend.example", "timeout_secs": 3}"#)
                .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
