#![allow(dead_code)]

use page_analytics::state::AppState;
use sqlx::PgPool;

pub async fn create_test_view(pool: &PgPool, page_url: &str, username: Option<&str>) {
    sqlx::query("INSERT INTO page_views (page_url, username) VALUES ($1, $2)")
        .bind(page_url)
        .bind(username)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn counter_value(pool: &PgPool) -> Option<i64> {
    sqlx::query_scalar("SELECT number_of_views FROM view_counters WHERE id = 1")
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool)
}
