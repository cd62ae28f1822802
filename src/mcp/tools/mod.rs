//! MCP tool implementations
//!
//! Each module holds one `#[tool_router]` impl block on `McpServer`; the
//! server combines them into a single router.

mod statistics;
mod tickets;


pub use statistics::TicketStatisticsParams;
pub use tickets::{ListTicketsParams, SearchTicketsParams};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;
use serde_json::json;

use crate::query::QueryError;

/// Map a query error to the MCP error a client should see.
///
/// Bad arguments become `invalid_params` carrying the accepted values;
/// everything else is an internal error.
pub(crate) fn map_query_error(err: QueryError) -> McpError {
    match err {
        QueryError::InvalidArgument { message, help } => {
            McpError::invalid_params(message, Some(json!({ "help": help })))
        }
        QueryError::StorageUnavailable { source } => {
            McpError::internal_error(format!("Storage unavailable: {}", source), None)
        }
    }
}

/// Serialize a tool result as pretty-printed JSON text content.
pub(crate) fn json_content<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(json!({"error": e.to_string()})),
        )
    })?;

    Ok(CallToolResult::success(vec![Content::text(content)]))
}
