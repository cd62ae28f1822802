//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the ticket query service to AI clients as MCP tools, over stdio
//! or the Streamable HTTP transport.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the `ServerHandler` that owns the combined tool router
//! - **tools**: one `#[tool_router]` impl block per tool group
//!   - tickets: `list_tickets`, `search_tickets`
//!   - statistics: `ticket_statistics`
//! - **service**: Streamable HTTP service factory
//! - **transport**: stdio and HTTP runners
//!
//! The server is generic over `D: Database`, so tests run it against an
//! in-memory store with no dynamic dispatch.

pub mod server;
mod service;
pub mod tools;
pub mod transport;

#[cfg(test)]
mod server_test;
#[cfg(test)]
mod transport_test;

pub use server::McpServer;
pub use service::create_mcp_service;
pub use transport::{HttpConfig, TransportError, serve_http, serve_stdio};
