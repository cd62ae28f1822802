//! Tests for the HTTP transport router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use crate::db::sqlite::fixtures::sample_db;
use crate::mcp::HttpConfig;
use crate::mcp::transport::router;

#[test]
fn test_http_config_defaults_to_loopback() {
    let config = HttpConfig::default();
    assert_eq!(config.addr().to_string(), "127.0.0.1:3737");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health_endpoint() {
    let app = router(Arc::new(sample_db().await), CancellationToken::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_path_is_not_found() {
    let app = router(Arc::new(sample_db().await), CancellationToken::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_mcp_service_is_mounted() {
    let app = router(Arc::new(sample_db().await), CancellationToken::new());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/mcp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_ne!(response.status(), StatusCode::NOT_FOUND);
}
