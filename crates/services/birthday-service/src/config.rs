//! Birthday service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Default database: a SQLite file next to the process, created on first use
pub const DEFAULT_DATABASE_URL: &str = "sqlite://birthdays.db?mode=rwc";

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Birthday service configuration.
#[derive(Debug, Clone)]
pub struct BirthdayServiceConfig {
    /// HTTP server settings
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl BirthdayServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                service_name: "birthday-service".to_string(),
                host: env::var("BIRTHDAY_SERVICE_HOST")
                    .unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("BIRTHDAY_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            database: DatabaseConfig {
                url: env::var("BIRTHDAY_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}

impl Default for BirthdayServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "birthday-service".to_string(),
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                ..DatabaseConfig::default()
            },
        }
    }
}
