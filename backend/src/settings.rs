//! Application settings loaded via OrthoConfig.
//!
//! Values come from `TASKMANAGER_*` environment variables, command-line flags
//! and an optional configuration file. The database path and bind address
//! carry OrthoConfig defaults, so a bare start loads; pool tuning falls back
//! to defaults in the accessors below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_DATABASE_URL: &str = "taskmanager.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_MIN_IDLE: u32 = 1;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a valid socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Configuration values controlling the HTTP server and database.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKMANAGER")]
pub struct AppSettings {
    /// Path of the SQLite database file.
    #[ortho_config(default = DEFAULT_DATABASE_URL.to_owned())]
    pub database_url: String,
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Maximum pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept warm in the pool.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub connection_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Return the database path.
    pub fn database_url(&self) -> &str {
        self.database_url.as_str()
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not
    /// parse as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_str();
        value
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            })
    }

    /// Build the pool configuration described by these settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.database_url())
            .with_max_size(self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE))
            .with_min_idle(Some(self.pool_min_idle.unwrap_or(DEFAULT_POOL_MIN_IDLE)))
            .with_connection_timeout(Duration::from_secs(
                self.connection_timeout_secs
                    .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS),
            ))
    }
}
