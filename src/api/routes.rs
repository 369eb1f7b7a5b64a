//! API route configuration.

use crate::api::handlers::{record_view_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET  /stats` - Aggregated page view statistics
/// - `POST /views` - Record a page view event
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/views", post(record_view_handler))
}
