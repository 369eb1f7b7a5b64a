//! DTOs for the aggregated statistics endpoint.

use serde::Serialize;

use crate::application::services::PageStats;
use crate::domain::repositories::{PageViewCount, UserViewCount};

/// Aggregated page view statistics.
///
/// The grouped lists are ordered by view count descending; anonymous views
/// appear under a `null` username.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_views: i64,
    pub views_per_page: Vec<PageViewCount>,
    pub views_per_user: Vec<UserViewCount>,
}

impl From<PageStats> for StatsResponse {
    fn from(stats: PageStats) -> Self {
        Self {
            total_views: stats.total_views,
            views_per_page: stats.views_per_page,
            views_per_user: stats.views_per_user,
        }
    }
}
