//! User service configuration.

use std::env;

use common::DatabaseConfig;

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("USER_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: lookup("USER_SERVICE_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: lookup("USER_SERVICE_DB_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
