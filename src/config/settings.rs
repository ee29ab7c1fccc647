use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://movies.db";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads the configuration from the process environment. Every key has a
    /// default; only a non-unicode `DATABASE_URL` is an error.
    pub fn new() -> Result<Self, std::env::VarError> {
        let database_url = match env::get(EnvKey::DatabaseUrl) {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_DATABASE_URL.to_string(),
            Err(e) => return Err(e),
        };

        Ok(Self {
            server_host: env::get_or(EnvKey::ServerHost, "0.0.0.0"),
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database: DatabaseConfig {
                url: database_url,
                max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 5),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = AppConfig {
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            database: DatabaseConfig::in_memory(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn detects_memory_databases() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        let file = DatabaseConfig {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
        };
        assert!(!file.is_in_memory());
    }
}
