//! Diesel table definitions for the SQLite store.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    users (id) {
        id -> BigInt,
        username -> Text,
        firstname -> Text,
        lastname -> Text,
        age -> BigInt,
        slug -> Text,
    }
}
