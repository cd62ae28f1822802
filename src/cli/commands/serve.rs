use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::cli::error::CliResult;
use crate::db::{Database, SqliteDatabase};
use crate::mcp::{HttpConfig, serve_http, serve_stdio};

/// Which MCP transport `soporte serve` runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http(HttpConfig),
}

/// Open the database read-only and serve it until the transport stops.
pub async fn serve(path: &Path, transport: Transport) -> CliResult<()> {
    let db = Arc::new(SqliteDatabase::open(path).await?);
    info!(path = %path.display(), "opened ticket database");

    let result = match transport {
        Transport::Stdio => serve_stdio(Arc::clone(&db)).await,
        Transport::Http(config) => serve_http(config, Arc::clone(&db)).await,
    };

    db.close().await;
    result?;
    Ok(())
}
