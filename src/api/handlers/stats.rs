//! Handler for aggregated page view statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the three page view aggregates as JSON.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// - `total_views` - count of all recorded views
/// - `views_per_page` - per-URL counts, ordered by count descending
/// - `views_per_user` - per-user counts, ordered by count descending;
///   anonymous views grouped under a `null` username
///
/// An empty event log yields zero and two empty lists.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database failures.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.page_stats().await?;

    Ok(Json(StatsResponse::from(stats)))
}
