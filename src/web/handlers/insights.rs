//! Insights dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::repositories::PageViewCount;
use crate::error::AppError;
use crate::state::AppState;

/// A per-user row prepared for rendering.
///
/// Anonymous views are labelled explicitly so the template does not have
/// to deal with missing usernames.
pub struct UserRow {
    pub username: String,
    pub views: i64,
}

/// Template for the insights dashboard page.
///
/// Renders `templates/insights.html` with:
/// - Total recorded views
/// - Views per page, most viewed first
/// - Views per user, most active first
#[derive(Template, WebTemplate)]
#[template(path = "insights.html")]
pub struct InsightsTemplate {
    pub total_views: i64,
    pub views_per_page: Vec<PageViewCount>,
    pub views_per_user: Vec<UserRow>,
}

/// Renders the insights dashboard.
///
/// # Endpoint
///
/// `GET /insights`
///
/// The aggregates are computed fresh on every request and rendered
/// server-side; an empty event log renders an empty dashboard.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database failures.
pub async fn insights_handler(
    State(state): State<AppState>,
) -> Result<InsightsTemplate, AppError> {
    let stats = state.stats_service.page_stats().await?;

    let views_per_user = stats
        .views_per_user
        .into_iter()
        .map(|row| UserRow {
            username: row.username.unwrap_or_else(|| "anonymous".to_string()),
            views: row.views,
        })
        .collect();

    Ok(InsightsTemplate {
        total_views: stats.total_views,
        views_per_page: stats.views_per_page,
        views_per_user,
    })
}
