//! Database error types.
//!
//! Storage-backend agnostic errors for ticket reads and seeding writes.
//! Uses miette for diagnostic output and thiserror for the derives.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Invalid data: {message} (hint: {help})")]
    #[diagnostic(code(soporte::db::invalid_data))]
    InvalidData { message: String, help: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(soporte::db::database_error))]
    Database { message: String },

    #[error("Schema error: {message}")]
    #[diagnostic(code(soporte::db::schema_error))]
    Schema { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(soporte::db::connection_error))]
    Connection {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DbError::Connection {
                    message: e.to_string(),
                    help: None,
                }
            }
            other => DbError::Database {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
