mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use page_analytics::web::handlers::insights_handler;
use sqlx::PgPool;

fn test_app(state: page_analytics::AppState) -> Router {
    Router::new()
        .route("/insights", get(insights_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_insights_renders_empty_dashboard(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(test_app(state)).unwrap();

    let response = server.get("/insights").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("Page View Insights"));
    assert!(body.contains("No page views recorded yet."));
}

#[sqlx::test]
async fn test_insights_renders_aggregates(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(test_app(state)).unwrap();

    common::create_test_view(&pool, "/home", Some("alice")).await;
    common::create_test_view(&pool, "/home", None).await;

    let response = server.get("/insights").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("/home"));
    assert!(body.contains("alice"));
    // Anonymous views get a readable label instead of being dropped
    assert!(body.contains("anonymous"));
}
