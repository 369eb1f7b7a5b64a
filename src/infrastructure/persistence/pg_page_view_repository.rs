//! PostgreSQL implementation of the page view repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPageView, PageView};
use crate::domain::repositories::{PageViewCount, PageViewRepository, UserViewCount};
use crate::error::AppError;

/// PostgreSQL repository for the append-only page view log.
///
/// Aggregation is done with explicit GROUP BY queries so the grouping and
/// ordering semantics live in one place, typed end to end.
pub struct PgPageViewRepository {
    pool: Arc<PgPool>,
}

impl PgPageViewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageViewRepository for PgPageViewRepository {
    async fn record(&self, new_view: NewPageView) -> Result<PageView, AppError> {
        let view = sqlx::query_as::<_, PageView>(
            r#"
            INSERT INTO page_views (page_url, username)
            VALUES ($1, $2)
            RETURNING id, page_url, username, viewed_at
            "#,
        )
        .bind(&new_view.page_url)
        .bind(&new_view.username)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(view)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM page_views
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_by_page(&self) -> Result<Vec<PageViewCount>, AppError> {
        let rows = sqlx::query_as::<_, PageViewCount>(
            r#"
            SELECT page_url, COUNT(*) AS views
            FROM page_views
            GROUP BY page_url
            ORDER BY views DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_by_user(&self) -> Result<Vec<UserViewCount>, AppError> {
        // NULL usernames form their own group: anonymous views are counted,
        // not dropped.
        let rows = sqlx::query_as::<_, UserViewCount>(
            r#"
            SELECT username, COUNT(*) AS views
            FROM page_views
            GROUP BY username
            ORDER BY views DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
