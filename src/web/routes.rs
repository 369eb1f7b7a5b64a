//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::insights_handler;
use axum::{Router, routing::get};

/// Server-rendered HTML routes.
///
/// # Endpoints
///
/// - `GET /insights` - Page view statistics dashboard
pub fn routes() -> Router<AppState> {
    Router::new().route("/insights", get(insights_handler))
}
