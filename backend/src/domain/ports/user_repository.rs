//! Driven port for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Port for reading and writing user rows.
///
/// Each call is its own unit of work: implementations check a session out,
/// run one statement, commit mutations and release the session before
/// returning, whatever the outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user and return it with its assigned identifier.
    async fn insert(&self, draft: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply `changes` to the user with `id` in a single conditional
    /// statement. Returns `None` when no row matched.
    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete the user with `id` in a single conditional statement. Returns
    /// `false` when no row matched.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
