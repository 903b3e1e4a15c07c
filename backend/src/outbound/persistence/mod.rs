//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the user repository
//! port backed by a single SQLite file, with async support through
//! `diesel-async`'s sync connection wrapper and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) never leave this module.
//! - **Scoped sessions**: every repository call checks one connection out of
//!   the pool and returns it when the call completes.
//! - **Strongly typed errors**: database errors are mapped to
//!   [`UserPersistenceError`](crate::domain::ports::UserPersistenceError).
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! run_migrations("taskmanager.db").await?;
//! let pool = DbPool::new(PoolConfig::new("taskmanager.db")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{BUSY_TIMEOUT_MS, DbPool, PoolConfig, PoolError, SqliteConn};
