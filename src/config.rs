// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BC_API_URL: &str = "http://localhost:8080/beancounter-platform/rest";
const DEFAULT_PORT: u16 = 9090;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on
    pub bind_addr: String,
    /// Server port
    pub port: u16,
    /// Base URL of the Beancounter platform API
    pub bc_api_url: String,
    /// Customer API key sent with every upstream call
    pub bc_api_key: String,
    /// Static assets directory; static serving is off when unset
    pub assets_dir: Option<PathBuf>,
    /// Per-request timeout for upstream calls
    pub upstream_timeout: Duration,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            bc_api_url: DEFAULT_BC_API_URL.to_string(),
            bc_api_key: "test_api_key".to_string(),
            assets_dir: None,
            upstream_timeout: Duration::from_secs(5),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match non_empty("PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::Invalid("PORT", raw))?,
                None => DEFAULT_PORT,
            },
            bc_api_url: non_empty("BC_API_URL").unwrap_or_else(|| DEFAULT_BC_API_URL.to_string()),
            bc_api_key: non_empty("BC_API_KEY").ok_or(ConfigError::Missing("BC_API_KEY"))?,
            assets_dir: non_empty("ASSETS_DIR").map(PathBuf::from),
            upstream_timeout: match non_empty("UPSTREAM_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(
                    raw.parse()
                        .map_err(|_| ConfigError::Invalid("UPSTREAM_TIMEOUT_SECS", raw))?,
                ),
                None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            },
        })
    }

    /// `host:port` the server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),

    #[error("Invalid Beancounter API URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("BC_API_KEY", " k3y ")])).unwrap();

        assert_eq!(config.bc_api_key, "k3y");
        assert_eq!(config.port, 9090);
        assert_eq!(config.bc_api_url, DEFAULT_BC_API_URL);
        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
        assert!(config.assets_dir.is_none());
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("BC_API_KEY", "k"),
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "8000"),
            ("BC_API_URL", "https://bc.example.com/rest"),
            ("ASSETS_DIR", "/srv/static"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
        assert_eq!(config.bc_api_url, "https://bc.example.com/rest");
        assert_eq!(config.assets_dir, Some(PathBuf::from("/srv/static")));
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("BC_API_KEY")));

        let err = Config::from_lookup(lookup(&[("BC_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("BC_API_KEY")));
    }

    #[test]
    fn test_invalid_port() {
        let err =
            Config::from_lookup(lookup(&[("BC_API_KEY", "k"), ("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));
    }
}
