//! Store configuration loaded from environment variables.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const MAX_CONNECTIONS: &str = "ACTIVITY_DB_MAX_CONNECTIONS";
pub const ACQUIRE_TIMEOUT_SECS: &str = "ACTIVITY_DB_ACQUIRE_TIMEOUT_SECS";
pub const STATEMENT_TIMEOUT_MS: &str = "ACTIVITY_STATEMENT_TIMEOUT_MS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Connection and deadline settings for the activity store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Deadline applied to each store operation; `None` waits indefinitely
    pub statement_timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            statement_timeout: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, `None` meaning unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URL))?;

        let mut config = Self::new(database_url);
        if let Some(max_connections) = parse_var(&lookup, MAX_CONNECTIONS)? {
            config.max_connections = max_connections;
        }
        if let Some(secs) = parse_var(&lookup, ACQUIRE_TIMEOUT_SECS)? {
            config.acquire_timeout = Duration::from_secs(secs);
        }
        config.statement_timeout = parse_var(&lookup, STATEMENT_TIMEOUT_MS)?.map(Duration::from_millis);

        Ok(config)
    }

    /// Opens a connection pool with these settings.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect(&self.database_url)
            .await?;
        tracing::debug!(max_connections = self.max_connections, "Connected to activity database");
        Ok(pool)
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
