//! Handler for recording page view events.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::record_view::{RecordViewRequest, ViewResponse};
use crate::domain::entities::NewPageView;
use crate::error::AppError;
use crate::state::AppState;

/// Records a single page view event.
///
/// # Endpoint
///
/// `POST /api/views`
///
/// # Request
///
/// ```json
/// {"page_url": "/pricing", "username": "alice"}
/// ```
///
/// `username` may be omitted or `null` for anonymous visits.
///
/// # Response
///
/// Returns 201 Created with the stored event, including its id and
/// database-assigned timestamp.
///
/// # Errors
///
/// Returns 400 Bad Request when `page_url` is empty or too long.
/// Returns 500 Internal Server Error on database failures.
pub async fn record_view_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecordViewRequest>,
) -> Result<(StatusCode, Json<ViewResponse>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::bad_request("Invalid page view", json!({ "errors": e.to_string() })))?;

    let view = state
        .stats_service
        .record_view(NewPageView {
            page_url: payload.page_url,
            username: payload.username,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ViewResponse::from(view))))
}
