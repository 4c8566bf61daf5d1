//! Shared helpers for the Diesel repositories.

use tracing::debug;

use super::pool::PoolError;

/// Rows per `INSERT` statement.
///
/// PostgreSQL caps a statement at 65535 bind parameters; the widest gateway
/// row has nine columns.
pub(crate) const INSERT_CHUNK: usize = 1_000;

/// Map a pool failure through a repository's connection constructor.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    debug!(%error, "database pool checkout failed");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => connection(message),
    }
}

/// Map a Diesel failure through a repository's query and connection
/// constructors.
///
/// Closed connections count as connection errors; everything else is a
/// query error with a generic message so SQL never reaches a client.
pub(crate) fn map_diesel_error<E>(
    error: diesel::result::Error,
    query: impl FnOnce(&'static str) -> E,
    connection: impl FnOnce(&'static str) -> E,
) -> E {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            query("duplicate key")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            query("foreign key violation")
        }
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        _ => query("database error"),
    }
}

/// Convert a payload index into the `position` column type.
pub(crate) fn position(index: usize) -> Result<i32, diesel::result::Error> {
    i32::try_from(index).map_err(|err| diesel::result::Error::QueryBuilderError(Box::new(err)))
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
        map_diesel_error(
            error,
            |m| Mapped::Query(m.to_owned()),
            |m| Mapped::Connection(m.to_owned()),
        )
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("raw driver text".to_owned()))
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::ClosedConnection), Mapped::Connection("database connection error".to_owned()))]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), Mapped::Query("duplicate key".to_owned()))]
    #[case(database_error(DatabaseErrorKind::ForeignKeyViolation), Mapped::Query("foreign key violation".to_owned()))]
    #[case(DieselError::NotFound, Mapped::Query("record not found".to_owned()))]
    #[case(DieselError::RollbackTransaction, Mapped::Query("database error".to_owned()))]
    fn diesel_errors_map_without_driver_text(#[case] error: DieselError, #[case] expected: Mapped) {
        assert_eq!(map(error), expected);
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    fn positions_fit_small_indices() {
        assert_eq!(position(7).ok(), Some(7));
        assert!(position(usize::MAX).is_err());
    }
}
