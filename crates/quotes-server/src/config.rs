//! Environment-driven server configuration

use ::config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Local file-backed store used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://main.db";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("db_max_connections", i64::from(DEFAULT_DB_MAX_CONNECTIONS))?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
