//! DTOs for recording page views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::PageView;

/// Request body for recording a page view.
#[derive(Debug, Deserialize, Validate)]
pub struct RecordViewRequest {
    /// URL of the visited page. Must be non-empty.
    #[validate(length(min = 1, max = 2048, message = "page_url must be 1..=2048 characters"))]
    pub page_url: String,

    /// Username of the visitor, omitted for anonymous visits.
    pub username: Option<String>,
}

/// A recorded page view as returned to the client.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub id: i64,
    pub page_url: String,
    pub username: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

impl From<PageView> for ViewResponse {
    fn from(view: PageView) -> Self {
        Self {
            id: view.id,
            page_url: view.page_url,
            username: view.username,
            viewed_at: view.viewed_at,
        }
    }
}
