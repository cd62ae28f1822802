use chrono::NaiveDate;
use tempfile::TempDir;

use crate::cli::commands::seed::*;
use crate::cli::error::CliError;
use crate::cli::utils::OutputFormat;
use crate::seed::{SeedError, SeedOptions};

fn options(force: bool) -> SeedOptions {
    SeedOptions {
        count: 20,
        rng_seed: Some(7),
        force,
        now: NaiveDate::from_ymd_opt(2025, 3, 10)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_seed_prints_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("soporte.db");

    let output = seed(&path, &options(false), OutputFormat::Table)
        .await
        .unwrap();

    assert!(output.starts_with("Created 20 tickets in"));
    assert!(output.contains("urgent today)"));
    assert!(output.contains("priority"));
    assert!(output.contains("status"));
    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_seed_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("soporte.db");

    let output = seed(&path, &options(false), OutputFormat::Json)
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["total"], 20);
    assert!(json["urgent_today"].as_u64().unwrap() >= 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_seed_refuses_existing_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("soporte.db");
    seed(&path, &options(false), OutputFormat::Json)
        .await
        .unwrap();

    let err = seed(&path, &options(false), OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Seed(SeedError::Exists { .. })));

    assert!(seed(&path, &options(true), OutputFormat::Json).await.is_ok());
}
