//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Domain use-case port for creating, editing and removing users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user. Duplicate usernames are accepted.
    async fn create_user(&self, draft: NewUser) -> Result<User, Error>;

    /// Overwrite the supplied name and age fields of an existing user.
    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error>;

    /// Remove an existing user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
