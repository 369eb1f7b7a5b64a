mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use page_analytics::api::handlers::record_view_handler;
use serde_json::json;
use sqlx::PgPool;

fn test_app(state: page_analytics::AppState) -> Router {
    Router::new()
        .route("/api/views", post(record_view_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_record_view_created(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/views")
        .json(&json!({ "page_url": "/pricing", "username": "alice" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["page_url"], "/pricing");
    assert_eq!(body["username"], "alice");
    assert!(body["id"].as_i64().unwrap() > 0);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM page_views")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_record_view_anonymous(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/views")
        .json(&json!({ "page_url": "/" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["username"].is_null());
}

#[sqlx::test]
async fn test_record_view_empty_url_rejected(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server
        .post("/api/views")
        .json(&json!({ "page_url": "" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM page_views")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
