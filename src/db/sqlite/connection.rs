//! SQLite database connection and schema management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::ticket::SqliteTicketRepository;
use crate::db::{Database, DbError, DbResult};

/// Table layout, embedded at compile time.
const SCHEMA: &str = include_str!("../../../data/sql/sqlite/schema.sql");

/// Read connections are cheap; a handful covers concurrent MCP sessions.
const READ_POOL_SIZE: u32 = 4;

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open an existing database file read-only.
    ///
    /// Fails with a connection error if the file does not exist, rather than
    /// creating an empty database that would answer every query with nothing.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DbError::Connection {
                message: format!("database not found at {}", path.display()),
                help: Some("Create it first with: soporte seed".to_string()),
            });
        }

        debug!(path = %path.display(), "opening ticket database read-only");
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(READ_POOL_SIZE)
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        Ok(Self { pool })
    }

    /// Open a database file for writing, creating it and the schema if missing.
    pub async fn create<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening ticket database for writing");
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create an in-memory database with the schema applied (useful for testing).
    ///
    /// The pool is pinned to a single connection that never expires, since
    /// every SQLite in-memory connection is its own database.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(connection_error)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(connection_error)?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create the tickets table if it does not exist.
    pub async fn ensure_schema(&self) -> DbResult<()> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| DbError::Schema {
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn connection_error(e: sqlx::Error) -> DbError {
    DbError::Connection {
        message: e.to_string(),
        help: None,
    }
}

impl Database for SqliteDatabase {
    type Tickets<'a> = SqliteTicketRepository<'a>;

    fn tickets(&self) -> Self::Tickets<'_> {
        SqliteTicketRepository { pool: &self.pool }
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
