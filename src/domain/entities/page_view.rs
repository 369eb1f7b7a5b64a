//! Page view entity representing a single recorded visit.

use chrono::{DateTime, Utc};

/// A page view recorded when a page of the tracked application is visited.
///
/// Views are append-only: once recorded they are never updated or deleted
/// by this service. The user is optional so that anonymous visits can be
/// recorded alongside authenticated ones.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PageView {
    pub id: i64,
    pub page_url: String,
    pub username: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

impl PageView {
    /// Creates a new PageView instance.
    pub fn new(
        id: i64,
        page_url: String,
        username: Option<String>,
        viewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            page_url,
            username,
            viewed_at,
        }
    }
}

/// Input data for recording a new page view.
///
/// The identifier and timestamp are assigned by the database.
#[derive(Debug, Clone)]
pub struct NewPageView {
    pub page_url: String,
    pub username: Option<String>,
}
