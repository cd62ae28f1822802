//! Query layer error types.
//!
//! Two classes only: the caller supplied something outside the contract,
//! or the store could not answer. Neither is retried here.

use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum QueryError {
    #[error("Invalid argument: {message}")]
    #[diagnostic(code(soporte::query::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: String,
    },

    #[error("Storage unavailable: {source}")]
    #[diagnostic(code(soporte::query::storage_unavailable))]
    StorageUnavailable {
        #[from]
        #[diagnostic_source]
        source: DbError,
    },
}

impl QueryError {
    pub(crate) fn invalid(message: impl Into<String>, help: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            message: message.into(),
            help: help.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_invalid_argument(&self) -> bool {
        matches!(self, QueryError::InvalidArgument { .. })
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
