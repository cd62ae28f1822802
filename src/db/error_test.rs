//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn invalid_data_error_displays_correctly() {
    let err = DbError::InvalidData {
        message: "unknown priority 'critica' in row 4".to_string(),
        help: "Expected one of: baja, media, alta, urgente".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid data: unknown priority 'critica' in row 4 (hint: Expected one of: baja, media, alta, urgente)"
    );
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "no such table: tickets".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: no such table: tickets");
}

#[test]
fn schema_error_displays_correctly() {
    let err = DbError::Schema {
        message: "table tickets already exists".to_string(),
    };
    assert_eq!(err.to_string(), "Schema error: table tickets already exists");
}

#[test]
fn connection_error_keeps_help_out_of_message() {
    let err = DbError::Connection {
        message: "database file not found".to_string(),
        help: Some("Run `soporte seed` first".to_string()),
    };
    assert_eq!(err.to_string(), "Connection error: database file not found");
}

#[test]
fn pool_timeout_maps_to_connection_error() {
    let err: DbError = sqlx::Error::PoolTimedOut.into();
    assert!(matches!(err, DbError::Connection { .. }));
}

#[test]
fn row_not_found_maps_to_database_error() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_type_works() {
    fn returns_ok() -> DbResult<u64> {
        Ok(60)
    }

    fn returns_err() -> DbResult<u64> {
        Err(DbError::Database {
            message: "test".to_string(),
        })
    }

    assert_eq!(returns_ok().unwrap(), 60);
    assert!(returns_err().is_err());
}
