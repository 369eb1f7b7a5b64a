//! PostgreSQL implementation of the view counter repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{VIEW_COUNTER_ID, ViewCounter};
use crate::domain::repositories::ViewCounterRepository;
use crate::error::AppError;

/// PostgreSQL repository for the singleton view counter.
///
/// The increment is a single `INSERT ... ON CONFLICT DO UPDATE` statement.
/// That removes the read-modify-write race a get-or-create-then-save
/// sequence would have: concurrent increments serialize on the row and
/// none are lost.
pub struct PgViewCounterRepository {
    pool: Arc<PgPool>,
}

impl PgViewCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewCounterRepository for PgViewCounterRepository {
    async fn increment(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO view_counters (id, number_of_views)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE
            SET number_of_views = view_counters.number_of_views + 1
            RETURNING number_of_views
            "#,
        )
        .bind(VIEW_COUNTER_ID)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn current(&self) -> Result<i64, AppError> {
        let counter = sqlx::query_as::<_, ViewCounter>(
            r#"
            SELECT id, number_of_views
            FROM view_counters
            WHERE id = $1
            "#,
        )
        .bind(VIEW_COUNTER_ID)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(counter.map(|c| c.number_of_views).unwrap_or(0))
    }
}
