//! Aggregate statistics tool

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
use crate::query::{Operation, Statistics};

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TicketStatisticsParams {
    #[schemars(
        description = "Column for the `distribution` breakdown: estado, prioridad, cliente (status/priority/client). Default: estado"
    )]
    pub group_by: Option<String>,
}

#[tool_router(router = statistics_router, vis = "pub(crate)")]
impl<D: Database + 'static> McpServer<D> {
    /// Totals and grouped counts over the whole ticket table
    #[tool(
        description = "Ticket statistics: total count, counts for every priority and every status (zero included), open and urgent totals, a distribution grouped by `group_by`, and the five clients with most tickets."
    )]
    pub async fn ticket_statistics(
        &self,
        params: Parameters<TicketStatisticsParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = Statistics::parse(params.0.group_by.as_deref()).map_err(map_query_error)?;

        let outcome = self
            .service
            .execute(Operation::Statistics(request))
            .await
            .map_err(map_query_error)?;

        json_content(&outcome)
    }
}
