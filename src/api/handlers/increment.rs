//! Handler for the view counter increment endpoint.

use axum::{Json, extract::State};

use crate::api::dto::count::CountResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Increments the singleton view counter and returns the new total.
///
/// # Endpoint
///
/// `GET /increment-view`
///
/// # Response
///
/// ```json
/// {"count": 42}
/// ```
///
/// The increment is atomic; the counter row is created at 1 when it does
/// not exist yet. Every call mutates durable state, so a page refresh
/// counts as a new view.
///
/// # Errors
///
/// Returns 500 Internal Server Error on database failures.
pub async fn increment_view_handler(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.counter_service.increment().await?;

    Ok(Json(CountResponse { count }))
}
