//! Diesel error mapping shared by the SQLite repositories.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel failures into query or connection constructors.
///
/// A closed connection and SQLite's `database is locked` (raised once the
/// busy timeout lapses) are transient and map to connection errors; anything
/// else is a query error.
pub fn map_basic_diesel_error<E, Q, C>(error: diesel::result::Error, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, info) if is_locked(info.message()) => {
            connection("database is busy")
        }
        _ => query("database error"),
    }
}

fn is_locked(message: &str) -> bool {
    message.contains("database is locked") || message.contains("database table is locked")
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(
            error,
            |message| Mapped::Query(message.to_owned()),
            |message| Mapped::Connection(message.to_owned()),
        )
    }

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(
            map(DieselError::NotFound),
            Mapped::Query("record not found".to_owned())
        );
    }

    #[rstest]
    #[case(DatabaseErrorKind::ClosedConnection, "connection closed")]
    #[case(DatabaseErrorKind::Unknown, "database is locked")]
    fn transient_failures_are_connection_errors(
        #[case] kind: DatabaseErrorKind,
        #[case] message: &str,
    ) {
        assert!(matches!(
            map(database_error(kind, message)),
            Mapped::Connection(_)
        ));
    }

    #[rstest]
    fn constraint_failures_are_query_errors() {
        let mapped = map(database_error(
            DatabaseErrorKind::NotNullViolation,
            "NOT NULL constraint failed: users.age",
        ));
        assert_eq!(mapped, Mapped::Query("database error".to_owned()));
    }

    #[rstest]
    fn pool_errors_keep_their_message() {
        let mapped: Mapped =
            map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }
}
