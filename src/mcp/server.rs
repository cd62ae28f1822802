//! MCP server implementation
//!
//! The coordinator that combines every tool group into one router and
//! answers the MCP handshake.

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::db::Database;
use crate::query::TicketQueryService;

const SERVER_INSTRUCTIONS: &str = r"Soporte MCP server - read-only access to a support ticket database.

Tools:
- `list_tickets`: list tickets filtered by `priority` (baja, media, alta, urgente) and/or
  `status` (abierto, cerrado). Omit a filter to match everything. Optional `limit` (1-100).
- `ticket_statistics`: totals, counts per priority and per status (every value present, zero
  included), a `distribution` grouped by `group_by` (estado, prioridad, cliente), and the top
  five clients.
- `search_tickets`: case-insensitive substring search over `field` (asunto, descripcion,
  ambos; default ambos). `text` must not be empty. Optional `limit` (1-100).

Results are newest first. English aliases (urgent, open, subject, ...) are accepted.";

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// Tool methods live in `tools/`, one impl block per group.
pub struct McpServer<D: Database> {
    pub(crate) service: TicketQueryService<D>,
    tool_router: ToolRouter<Self>,
}

impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given database handle.
    pub fn new(db: Arc<D>) -> Self {
        Self {
            service: TicketQueryService::new(db),
            tool_router: Self::ticket_router() + Self::statistics_router(),
        }
    }
}

impl<D: Database + 'static> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(SERVER_INSTRUCTIONS.to_string())
    }
}
