//! Service configuration: defaults, an optional TOML file, then environment overrides.

use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::search::SearchTotal;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings the proxy is started with.
///
/// Built once at startup and injected; handlers never look at the
/// environment themselves.
#[derive(Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    /// Secret sent upstream as `X-API-Key`.
    pub api_key: String,
    /// Versioned upstream root, e.g. `https://nest.owasp.dev/api/v0`.
    pub api_url: String,
    /// Address the HTTP server listens on.
    pub bind: SocketAddr,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
    /// What the search endpoint reports as `total`.
    pub search_total: SearchTotal,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: nest_api::DEFAULT_BASE_URL.to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            search_total: SearchTotal::default(),
        }
    }
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_url", &self.api_url)
            .field("bind", &self.bind)
            .field("timeout_secs", &self.timeout_secs)
            .field("search_total", &self.search_total)
            .finish()
    }
}

impl ProxyConfig {
    /// Loads defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };
        let config = base.with_env_overrides(|key| std::env::var(key).ok())?;
        if config.api_key.is_empty() {
            tracing::warn!("NEST_API_KEY is not set; upstream requests will be unauthenticated");
        }
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `NEST_*` overrides read through `lookup`. Empty values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = var("NEST_API_KEY") {
            self.api_key = key;
        }
        if let Some(url) = var("NEST_API_URL") {
            self.api_url = url;
        }
        if let Some(bind) = var("NEST_PROXY_BIND") {
            self.bind = parse_value("NEST_PROXY_BIND", &bind)?;
        }
        if let Some(secs) = var("NEST_PROXY_TIMEOUT_SECS") {
            self.timeout_secs = parse_value("NEST_PROXY_TIMEOUT_SECS", &secs)?;
        }
        if let Some(mode) = var("NEST_SEARCH_TOTAL") {
            self.search_total = parse_value("NEST_SEARCH_TOTAL", &mode)?;
        }
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Builds the upstream client these settings describe.
    pub fn build_client(&self) -> Result<nest_api::Client, nest_api::Error> {
        nest_api::Client::with_timeout(&self.api_url, &self.api_key, self.timeout())
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.api_url, "https://nest.owasp.dev/api/v0");
        assert_eq!(config.bind.to_string(), "127.0.0.1:3000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.search_total, SearchTotal::Filtered);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = ProxyConfig::from_toml_str(
            r#"
            api_url = "http://localhost:8000/api/v0"
            bind = "0.0.0.0:8080"
            search_total = "returned"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8000/api/v0");
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.search_total, SearchTotal::Returned);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let err = ProxyConfig::from_toml_str("cache_ttl = 30").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_file() {
        let config = ProxyConfig::default()
            .with_env_overrides(env(&[
                ("NEST_API_KEY", "secret"),
                ("NEST_PROXY_TIMEOUT_SECS", "5"),
                ("NEST_API_URL", ""),
            ]))
            .unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.api_url, nest_api::DEFAULT_BASE_URL);
    }

    #[test]
    fn env_rejects_bad_values() {
        let err = ProxyConfig::default()
            .with_env_overrides(env(&[("NEST_PROXY_BIND", "not-an-address")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "NEST_PROXY_BIND", .. }
        ));

        let err = ProxyConfig::default()
            .with_env_overrides(env(&[("NEST_SEARCH_TOTAL", "everything")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn debug_redacts_key() {
        let config = ProxyConfig {
            api_key: "secret".to_string(),
            ..ProxyConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }
}
