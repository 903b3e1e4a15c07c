//! Embedded schema migrations.
//!
//! The SQL under `backend/migrations` is compiled into the binary and applied
//! on a plain blocking connection before the pool is built.

use diesel::{Connection, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations bundled at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while bringing the schema up to date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The database file could not be opened.
    #[error("failed to open database for migrations: {message}")]
    Connection { message: String },

    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },

    /// The blocking migration task did not complete.
    #[error("migration task failed: {message}")]
    Task { message: String },
}

/// Apply all pending migrations to the database at `database_url`.
///
/// Creates the database file when it does not exist. Already-applied
/// migrations are skipped, so calling this on every start is safe.
///
/// # Errors
///
/// Returns [`MigrationError`] when the file cannot be opened or a migration
/// fails.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || apply_pending(&url))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}

fn apply_pending(database_url: &str) -> Result<(), MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    info!(applied = applied.len(), "database migrations complete");
    Ok(())
}
