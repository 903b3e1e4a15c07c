//! Async-safe connection pool for Diesel SQLite connections.
//!
//! SQLite only offers a blocking driver, so each connection is wrapped in
//! `diesel-async`'s `SyncConnectionWrapper`, which runs statements on the
//! Tokio blocking pool. `bb8` manages checkout, so a request-scoped session is
//! simply a [`PooledConnection`] guard that returns to the pool on drop.
//!
//! Every new connection is configured with a busy timeout, WAL journalling
//! and foreign key enforcement before it is handed out.

use std::time::Duration;

use diesel::{ConnectionError, ConnectionResult, SqliteConnection};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Async wrapper around a blocking SQLite connection.
pub type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

/// Milliseconds a writer waits on a locked database before failing.
pub const BUSY_TIMEOUT_MS: u32 = 5_000;

const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;";

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("taskmanager.db")
///     .with_max_size(4)
///     .with_min_idle(None)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database_url(), "taskmanager.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration for the SQLite file at `database_url`.
    ///
    /// Defaults: 10 connections, 1 kept idle, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(1),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn establish_connection(database_url: &str) -> BoxFuture<'_, ConnectionResult<SqliteConn>> {
    async move {
        let mut conn = SqliteConn::establish(database_url).await?;
        conn.batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        conn.batch_execute(CONNECTION_PRAGMAS)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Async connection pool for SQLite via Diesel.
///
/// # Example
///
/// ```no_run
/// use backend::outbound::persistence::{DbPool, PoolConfig};
///
/// # async fn run() -> Result<(), backend::outbound::persistence::PoolError> {
/// let pool = DbPool::new(PoolConfig::new("taskmanager.db")).await?;
/// let _conn = pool.get().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteConn>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed, for
    /// example when the database file cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_connection);
        let manager = AsyncDieselConnectionManager::<SqliteConn>::new_with_config(
            config.database_url,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Check a connection out of the pool.
    ///
    /// The guard returns the connection when dropped.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteConn>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
