//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! Writes run inside a transaction and use `RETURNING`, so each mutation is a
//! single statement and reads back exactly the row it touched.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, Slug, User, UserChanges, UserId, Username};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        |message| UserPersistenceError::query(message),
        |message| UserPersistenceError::connection(message),
    )
}

fn row_to_user(row: UserRow) -> User {
    let UserRow {
        id,
        username,
        firstname,
        lastname,
        age,
        slug,
    } = row;
    User::from_parts(
        UserId::new(id),
        Username::new(username),
        firstname,
        lastname,
        age,
        Slug::from_stored(slug),
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order_by(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn insert(&self, draft: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewUserRow {
            username: draft.username().as_ref(),
            firstname: draft.firstname(),
            lastname: draft.lastname(),
            age: draft.age(),
            slug: draft.slug().as_ref(),
        };

        let row = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(users::table)
                        .values(&new_row)
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_user(row))
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        // Diesel rejects an empty changeset; an empty update only needs the
        // row to exist.
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let update = UserUpdate {
            firstname: changes.firstname.as_deref(),
            lastname: changes.lastname.as_deref(),
            age: changes.age,
        };

        let row = conn
            .transaction(|conn| {
                async move {
                    diesel::update(users::table.find(id.get()))
                        .set(&update)
                        .returning(UserRow::as_returning())
                        .get_result(conn)
                        .await
                        .optional()
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_user))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(users::table.find(id.get()))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for row conversion and error mapping; database
    //! behaviour is covered by `tests/diesel_user_repository.rs`.
    use super::*;
    use crate::domain::ports::UserPersistenceError;
    use rstest::{fixture, rstest};

    #[fixture]
    fn row() -> UserRow {
        UserRow {
            id: 3,
            username: "Jane Doe".to_owned(),
            firstname: "Jane".to_owned(),
            lastname: "Doe".to_owned(),
            age: 30,
            slug: "jane-doe".to_owned(),
        }
    }

    #[rstest]
    fn row_converts_to_domain_user(row: UserRow) {
        let user = row_to_user(row);
        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(user.username().as_ref(), "Jane Doe");
        assert_eq!(user.slug().as_ref(), "jane-doe");
        assert_eq!(user.age(), 30);
    }

    #[rstest]
    fn stored_slug_is_not_recomputed(mut row: UserRow) {
        row.slug = "legacy-slug".to_owned();
        let user = row_to_user(row);
        assert_eq!(user.slug().as_ref(), "legacy-slug");
    }

    #[rstest]
    fn blank_stored_username_converts(mut row: UserRow) {
        row.username = String::new();
        row.slug = String::new();
        let user = row_to_user(row);
        assert_eq!(user.username().as_ref(), "");
        assert_eq!(user.slug().as_ref(), "");
    }

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("unable to open database file"))]
    fn pool_errors_map_to_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            UserPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
