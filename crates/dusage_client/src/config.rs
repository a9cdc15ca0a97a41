use std::time::Duration;

use dusage_common::diagnostic::{Diagnosable, DiagnosticCode};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:2375";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported engine endpoint {0}: only tcp://, http:// and https:// are supported")]
    UnsupportedScheme(String),
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

impl Diagnosable for ConfigError {
    fn code(&self) -> DiagnosticCode {
        match self {
            Self::UnsupportedScheme(_) => DiagnosticCode("CONFIG_UNSUPPORTED_ENDPOINT"),
            Self::InvalidValue { .. } => DiagnosticCode("CONFIG_INVALID_VALUE"),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnsupportedScheme(_) => Some("Expose the engine on TCP, e.g. tcp://127.0.0.1:2375.".to_string()),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Where the engine lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, always `http://` or `https://`, no trailing slash.
    pub endpoint: String,
    /// e.g. `1.45`; requests go to `/v1.45/...` when set.
    pub api_version: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_version: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads `DUSAGE_HOST` (or `DOCKER_HOST`), `DUSAGE_API_VERSION`
    /// (or `DOCKER_API_VERSION`) and `DUSAGE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(*k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(host) = get(&["DUSAGE_HOST", "DOCKER_HOST"]) {
            config = config.with_endpoint(&host)?;
        }
        if let Some(version) = get(&["DUSAGE_API_VERSION", "DOCKER_API_VERSION"]) {
            config = config.with_api_version(version);
        }
        if let Some(secs) = get(&["DUSAGE_TIMEOUT_SECS"]) {
            let secs: u64 = secs.parse().map_err(|_| ConfigError::InvalidValue {
                var: "DUSAGE_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = normalize_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        let version = version.trim().trim_start_matches('v');
        self.api_version = (!version.is_empty()).then(|| version.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `/v1.45` or the empty string.
    pub fn api_prefix(&self) -> String {
        self.api_version
            .as_deref()
            .map(|v| format!("/v{v}"))
            .unwrap_or_default()
    }
}

fn normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim().trim_end_matches('/');
    let endpoint = if let Some(rest) = raw.strip_prefix("tcp://") {
        format!("http://{rest}")
    } else if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else if raw.contains("://") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    } else {
        format!("http://{raw}")
    };
    Ok(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint, "http://127.0.0.1:2375");
        assert_eq!(config.api_prefix(), "");
    }

    #[test]
    fn test_tcp_host_becomes_http() {
        let config = ClientConfig::from_lookup(env(&[("DOCKER_HOST", "tcp://10.0.0.5:2376/")])).unwrap();
        assert_eq!(config.endpoint, "http://10.0.0.5:2376");
    }

    #[test]
    fn test_own_variables_win() {
        let config = ClientConfig::from_lookup(env(&[
            ("DOCKER_HOST", "tcp://docker:2375"),
            ("DUSAGE_HOST", "https://engine.internal"),
            ("DUSAGE_API_VERSION", "v1.45"),
            ("DUSAGE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "https://engine.internal");
        assert_eq!(config.api_version.as_deref(), Some("1.45"));
        assert_eq!(config.api_prefix(), "/v1.45");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blank_variables_are_unset() {
        let config = ClientConfig::from_lookup(env(&[("DUSAGE_HOST", " "), ("DOCKER_HOST", "engine:2375")])).unwrap();
        assert_eq!(config.endpoint, "http://engine:2375");
    }

    #[test]
    fn test_unix_socket_is_rejected() {
        let err = ClientConfig::from_lookup(env(&[("DOCKER_HOST", "unix:///var/run/docker.sock")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
        assert_eq!(err.code(), DiagnosticCode("CONFIG_UNSUPPORTED_ENDPOINT"));
    }

    #[test]
    fn test_bad_timeout() {
        let err = ClientConfig::from_lookup(env(&[("DUSAGE_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "DUSAGE_TIMEOUT_SECS", .. }));
    }
}
