//! User resource lifecycle.
//!
//! [`UserService`] implements the user driving ports on top of any
//! [`UserRepository`]. Missing rows surface as `NotFound` with the fixed
//! messages clients rely on.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Message returned when a read targets a missing user.
pub const USER_WAS_NOT_FOUND: &str = "User was not found";
/// Message returned when an update or delete targets a missing user.
pub const USER_NOT_FOUND: &str = "User not found";

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service over the given repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo.list().await.map_err(map_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(USER_WAS_NOT_FOUND))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: NewUser) -> Result<User, Error> {
        let user = self
            .user_repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(user_id = %user.id(), slug = %user.slug(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, Error> {
        let updated = self
            .user_repo
            .update(id, &changes)
            .await
            .map_err(map_repository_error)?;
        match updated {
            Some(user) => {
                info!(user_id = %id, "user updated");
                Ok(user)
            }
            None => {
                debug!(user_id = %id, "update matched no user");
                Err(Error::not_found(USER_NOT_FOUND))
            }
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let deleted = self
            .user_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if deleted {
            info!(user_id = %id, "user deleted");
            Ok(())
        } else {
            debug!(user_id = %id, "delete matched no user");
            Err(Error::not_found(USER_NOT_FOUND))
        }
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
