//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET /insights`       - HTML statistics dashboard
//! - `GET /increment-view` - Increment the view counter, returns `{"count": n}`
//! - `GET /health`         - Health check (database)
//! - `/api/*`              - JSON API (stats, view recording)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/insights/`
//!   and `/increment-view/` resolve like their slash-less forms

use crate::api;
use crate::api::handlers::{health_handler, increment_view_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::routes())
        .route("/increment-view", get(increment_view_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
