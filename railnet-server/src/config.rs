use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use railnet_core::{DEFAULT_TOP_N, NetworkConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Server settings, read from a TOML file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub cities_path: PathBuf,
    pub connections_path: PathBuf,
    /// Cities reported by the ranking endpoints
    pub top_n: usize,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cities_path: PathBuf::from("data/cities.csv"),
            connections_path: PathBuf::from("data/connections.csv"),
            top_n: DEFAULT_TOP_N,
            request_timeout_secs: 30,
            max_concurrent_requests: 64,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::Invalid("top_n must be at least 1".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".into(),
            ));
        }
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn network(&self) -> NetworkConfig {
        NetworkConfig::new(&self.cities_path, &self.connections_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = ServerConfig::from_toml(
            r#"
            bind = "0.0.0.0:8080"
            top_n = 10
            cities_path = "/srv/rail/cities.csv"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.top_n, 10);
        assert_eq!(config.cities_path, PathBuf::from("/srv/rail/cities.csv"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn rejects_unknown_keys_and_zero_limits() {
        assert!(matches!(
            ServerConfig::from_toml("port = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ServerConfig::from_toml("max_concurrent_requests = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }
}
