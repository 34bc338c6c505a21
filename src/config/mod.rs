use std::env;
use std::fmt;

use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SERVER_PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),
    #[error("STORAGE_BACKEND must be 'mongodb' or 'memory', got '{0}'")]
    InvalidStorageBackend(String),
}

/// Where user records are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StorageBackend::MongoDb),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::InvalidStorageBackend(value.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::MongoDb => write!(f, "mongodb"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub storage_backend: StorageBackend,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// `main` loads `.env` before calling this so that its values are visible here.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port))?,
            None => 8080,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(backend) => StorageBackend::parse(&backend)?,
            None => StorageBackend::MongoDb,
        };

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            storage_backend,
            mongodb_uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "register_api".to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.storage_backend, StorageBackend::MongoDb);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "register_api");
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("STORAGE_BACKEND", "Memory"),
            ("DATABASE_NAME", "users_test"),
        ])
        .unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.database_name, "users_test");
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref p) if p == "eighty"));

        let err = config_from(&[("SERVER_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_invalid_storage_backend() {
        let err = config_from(&[("STORAGE_BACKEND", "postgres")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "STORAGE_BACKEND must be 'mongodb' or 'memory', got 'postgres'"
        );
    }
}
