//! Tests for the MCP server coordinator

use std::sync::Arc;

use rmcp::model::ClientInfo;
use rmcp::{ClientHandler, ServerHandler, ServiceExt};

use crate::db::SqliteDatabase;
use crate::db::sqlite::fixtures::sample_db;
use crate::mcp::McpServer;

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_info_advertises_tools() {
    let server: McpServer<SqliteDatabase> = McpServer::new(Arc::new(sample_db().await));
    let info = server.get_info();

    assert!(info.capabilities.tools.is_some());
    let instructions = info.instructions.unwrap();
    assert!(instructions.contains("list_tickets"));
    assert!(instructions.contains("ticket_statistics"));
    assert!(instructions.contains("search_tickets"));
}

#[test]
fn test_tool_groups_cover_every_tool() {
    let router = McpServer::<SqliteDatabase>::ticket_router()
        + McpServer::<SqliteDatabase>::statistics_router();
    let mut names: Vec<String> = router
        .list_all()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec!["list_tickets", "search_tickets", "ticket_statistics"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_protocol_list_tools_round_trip() {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server: McpServer<SqliteDatabase> = McpServer::new(Arc::new(sample_db().await));
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await.unwrap();
        service.waiting().await.unwrap();
    });

    let client = DummyClient.serve(client_transport).await.unwrap();
    let tools = client.list_all_tools().await.unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"list_tickets"));
    assert!(names.contains(&"ticket_statistics"));
    assert!(names.contains(&"search_tickets"));

    client.cancel().await.unwrap();
    server_handle.await.unwrap();
}
