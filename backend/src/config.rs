use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://courses.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "course_setup=debug";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| AppError::Config(format!("DB_MAX_CONNECTIONS is invalid: {}", e)))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
        }

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).expect("Failed to build config");
        assert_eq!(config.database_url, "sqlite://courses.db");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("DB_MAX_CONNECTIONS", "2"),
        ]))
        .expect("Failed to build config");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let bad_addr = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")]));
        assert!(matches!(bad_addr, Err(AppError::Config(_))));

        let zero = AppConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "0")]));
        assert!(matches!(zero, Err(AppError::Config(_))));
    }
}
