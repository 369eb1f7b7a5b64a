//! Page view statistics service.

use std::sync::Arc;

use crate::domain::entities::{NewPageView, PageView};
use crate::domain::repositories::{PageViewCount, PageViewRepository, UserViewCount};
use crate::error::AppError;

/// The three aggregates computed over the page view log.
///
/// Passed unmodified to the presentation layer; no filtering, pagination,
/// or time-windowing is applied here.
#[derive(Debug, Clone)]
pub struct PageStats {
    pub total_views: i64,
    pub views_per_page: Vec<PageViewCount>,
    pub views_per_user: Vec<UserViewCount>,
}

/// Service for recording page views and computing view statistics.
pub struct StatsService {
    repository: Arc<dyn PageViewRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn PageViewRepository>) -> Self {
        Self { repository }
    }

    /// Records a single page view event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_view(&self, new_view: NewPageView) -> Result<PageView, AppError> {
        self.repository.record(new_view).await
    }

    /// Computes the total view count plus per-page and per-user breakdowns.
    ///
    /// An empty event log yields zero and two empty lists, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn page_stats(&self) -> Result<PageStats, AppError> {
        let total_views = self.repository.count_all().await?;
        let views_per_page = self.repository.count_by_page().await?;
        let views_per_user = self.repository.count_by_user().await?;

        Ok(PageStats {
            total_views,
            views_per_page,
            views_per_user,
        })
    }
}
