//! MCP transports: stdio for local clients, Streamable HTTP for remote ones.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::{Router, routing::get};
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::db::Database;

use super::server::McpServer;
use super::service::create_mcp_service;

pub const DEFAULT_HTTP_PORT: u16 = 3737;

#[derive(Error, Diagnostic, Debug)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(soporte::mcp::io))]
    Io(#[from] std::io::Error),

    #[error("MCP session failed: {message}")]
    #[diagnostic(code(soporte::mcp::session))]
    Session { message: String },
}

/// HTTP transport configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpConfig {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio<D: Database + 'static>(db: Arc<D>) -> Result<(), TransportError> {
    info!("MCP server starting (stdio transport)");

    let running = McpServer::new(db)
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| TransportError::Session {
            message: e.to_string(),
        })?;

    let reason = running.waiting().await.map_err(|e| TransportError::Session {
        message: e.to_string(),
    })?;
    info!(?reason, "MCP stdio session ended");
    Ok(())
}

/// Router with `GET /health` and the MCP service under `/mcp`.
pub fn router<D: Database + 'static>(db: Arc<D>, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/mcp", create_mcp_service(db, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn serve_http<D: Database + 'static>(
    config: HttpConfig,
    db: Arc<D>,
) -> Result<(), TransportError> {
    let ct = CancellationToken::new();
    let app = router(db, ct.clone());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl-C: {}", e);
            }
            info!("Shutting down MCP HTTP server");
            ct.cancel();
        })
        .await?;

    Ok(())
}
