use std::sync::Arc;

use crate::cli::commands::tickets::*;
use crate::cli::error::CliError;
use crate::cli::utils::OutputFormat;
use crate::db::SqliteDatabase;
use crate::db::sqlite::fixtures::sample_db;
use crate::query::TicketQueryService;

async fn service() -> TicketQueryService<SqliteDatabase> {
    TicketQueryService::new(Arc::new(sample_db().await))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tickets_table() {
    let service = service().await;
    let output = list_tickets(
        &service,
        ListTicketsArgs {
            priority: Some("urgente"),
            status: Some("abierto"),
            limit: None,
        },
        OutputFormat::Table,
    )
    .await
    .unwrap();

    assert!(output.contains("ID"));
    assert!(output.contains("Error 500 en endpoint de pagos"));
    assert!(output.contains("urgente"));
    assert!(!output.contains("Innovatech"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tickets_json() {
    let service = service().await;
    let output = list_tickets(
        &service,
        ListTicketsArgs {
            status: Some("cerrado"),
            limit: Some(2),
            ..Default::default()
        },
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tickets_table_notes_truncation() {
    let service = service().await;
    let output = list_tickets(
        &service,
        ListTicketsArgs {
            limit: Some(3),
            ..Default::default()
        },
        OutputFormat::Table,
    )
    .await
    .unwrap();

    assert!(output.ends_with("Showing 3 of 8 tickets."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_tickets_invalid_status() {
    let service = service().await;
    let err = list_tickets(
        &service,
        ListTicketsArgs {
            status: Some("pendiente"),
            ..Default::default()
        },
        OutputFormat::Table,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::Query(e) if e.is_invalid_argument()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_tickets_empty_result() {
    let service = service().await;
    let output = search_tickets(&service, "kubernetes", None, None, OutputFormat::Table)
        .await
        .unwrap();

    assert_eq!(output, "No tickets found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_tickets_description_field() {
    let service = service().await;
    let output = search_tickets(
        &service,
        "RABBITMQ",
        Some("descripcion"),
        None,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["id"], 5);
}
