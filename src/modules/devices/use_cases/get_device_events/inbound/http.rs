use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

// An id that does not parse as an integer is rejected with 400 rather than
// left without a response.
pub async fn handle(
    State(state): State<AppState>,
    device_id: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let Path(device_id) = match device_id {
        Ok(p) => p,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    let events = state.store.device_events(device_id).await;
    Json(events).into_response()
}
