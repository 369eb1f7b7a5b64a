//! Repository trait for the page view event log.

use crate::domain::entities::{NewPageView, PageView};
use crate::error::AppError;
use async_trait::async_trait;

/// View count for a single page URL.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct PageViewCount {
    pub page_url: String,
    pub views: i64,
}

/// View count for a single user.
///
/// `username` is `None` for anonymous visits; those group under a single
/// null key rather than being dropped from the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize)]
pub struct UserViewCount {
    pub username: Option<String>,
    pub views: i64,
}

/// Repository interface for recording and aggregating page views.
///
/// The event log is append-only: this interface offers no update or delete
/// operations. Aggregates are computed fresh on every call, with no
/// filtering, pagination, or time-windowing.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPageViewRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageViewRepository: Send + Sync {
    /// Records a new page view event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_view: NewPageView) -> Result<PageView, AppError>;

    /// Counts all recorded page views.
    ///
    /// An empty log yields 0, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Counts views per distinct page URL, ordered by count descending.
    ///
    /// Ties appear in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_page(&self) -> Result<Vec<PageViewCount>, AppError>;

    /// Counts views per distinct username, ordered by count descending.
    ///
    /// Anonymous views (no username) are grouped under a single null key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_user(&self) -> Result<Vec<UserViewCount>, AppError>;
}
