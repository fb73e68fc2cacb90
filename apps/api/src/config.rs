//! Environment-driven configuration.

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PostgreSQL connection string; in-memory storage is used when absent
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `HOST`, `PORT` and `DATABASE_MAX_CONNECTIONS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key: "HOST", value: host })?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
