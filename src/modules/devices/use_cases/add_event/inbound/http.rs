use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::devices::core::event::DeviceEvent;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeviceEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let event_id = event.event_id;
    let device_id = event.device_id;
    state.store.add_event(event).await;
    tracing::info!(event_id, device_id, "event added");

    (
        StatusCode::CREATED,
        format!("Event {event_id} added for Device {device_id}."),
    )
        .into_response()
}
