//! Ticket listing and search tools

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::mcp::McpServer;
use crate::mcp::tools::{json_content, map_query_error};
use crate::query::{ListTickets, Operation, SearchTickets};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListTicketsParams {
    #[schemars(
        description = "Filter by priority: baja, media, alta, urgente (English low/medium/high/urgent also accepted). Omit for all."
    )]
    pub priority: Option<String>,
    #[schemars(
        description = "Filter by status: abierto, cerrado (open/closed also accepted). Omit for all."
    )]
    pub status: Option<String>,
    #[schemars(
        description = "Maximum number of tickets to return (1-100). Omit to return every match."
    )]
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchTicketsParams {
    #[schemars(description = "Text to look for (case-insensitive substring, must not be empty)")]
    #[serde(alias = "query")]
    pub text: String,
    #[schemars(
        description = "Field to search: asunto, descripcion, ambos (subject/description/both). Default: ambos"
    )]
    pub field: Option<String>,
    #[schemars(
        description = "Maximum number of tickets to return (1-100). Omit to return every match."
    )]
    pub limit: Option<usize>,
}

#[tool_router(router = ticket_router, vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    /// List tickets filtered by priority and status, newest first
    #[tool(
        description = "List support tickets filtered by priority and/or status (logical AND). Omitted filters match everything. Results are newest first; `total` counts every match before `limit`."
    )]
    pub async fn list_tickets(
        &self,
        params: Parameters<ListTicketsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let request = ListTickets::parse(
            params.priority.as_deref(),
            params.status.as_deref(),
            params.limit,
        )
        .map_err(map_query_error)?;

        let outcome = self
            .service
            .execute(Operation::ListTickets(request))
            .await
            .map_err(map_query_error)?;

        json_content(&outcome)
    }

    /// Case-insensitive substring search over subject and/or description
    #[tool(
        description = "Search tickets whose subject and/or description contain the given text (case-insensitive, literal substring; no ranking). Results are newest first."
    )]
    pub async fn search_tickets(
        &self,
        params: Parameters<SearchTicketsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let request = SearchTickets::parse(&params.text, params.field.as_deref(), params.limit)
            .map_err(map_query_error)?;

        let outcome = self
            .service
            .execute(Operation::SearchTickets(request))
            .await
            .map_err(map_query_error)?;

        json_content(&outcome)
    }
}
