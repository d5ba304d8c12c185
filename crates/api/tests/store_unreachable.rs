//! Behaviour when the MongoDB server cannot be reached at all.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use axum::Router;
use catalog_db::MongoProductRepo;
use common::{body_json, body_text, build_app_with, get, post_json};
use serde_json::json;

/// Nothing listens on port 1, so every dial fails after the dial timeout.
const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/catalog";

fn unreachable_app() -> Router {
    let repo = MongoProductRepo::from_uri(UNREACHABLE_URI, "catalog", Duration::from_millis(300));
    build_app_with(Arc::new(repo))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn api_reports_server_error_before_request_timeout() {
    let app = unreachable_app();

    let started = Instant::now();
    let response = get(app.clone(), "/api/products").await;
    assert!(started.elapsed() < Duration::from_secs(10));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Server error");
    assert_eq!(body["code"], "INTERNAL_ERROR");

    let response = post_json(app, "/api/products", json!({ "name": "Lamp", "price": 10 })).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn pages_show_fetch_failure_when_database_down() {
    let app = unreachable_app();

    let response = get(app.clone(), "/customer").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Failed to fetch products"));

    let response = get(app.clone(), "/admin").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Failed to fetch products"));

    let body = body_json(get(app, "/health").await).await;
    assert_eq!(body["status"], "degraded");
}
