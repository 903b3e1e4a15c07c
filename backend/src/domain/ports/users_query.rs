//! Driving port for reading users.
//!
//! Inbound adapters use this port without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for user reads.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every stored user, oldest first.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, or [`crate::domain::ErrorCode::NotFound`].
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
