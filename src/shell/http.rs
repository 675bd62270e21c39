use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::devices::use_cases::add_event::inbound::http as add_event_http;
use crate::modules::devices::use_cases::get_device_events::inbound::http as get_events_http;
use crate::modules::devices::use_cases::register_device::inbound::http as register_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register-device", post(register_http::handle))
        .route("/add-event", post(add_event_http::handle))
        .route("/get-device-events/{device_id}", get(get_events_http::handle))
        .with_state(state)
}
