//! Internal Diesel row structs for the users table.
//!
//! These types never leave the persistence layer; the repository converts
//! them into domain values.

use diesel::prelude::*;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub age: i64,
    pub slug: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub age: i64,
    pub slug: &'a str,
}

/// Changeset struct for partial updates. `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub firstname: Option<&'a str>,
    pub lastname: Option<&'a str>,
    pub age: Option<i64>,
}
