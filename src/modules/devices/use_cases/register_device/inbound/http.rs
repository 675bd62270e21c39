use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::devices::core::device::Device;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Device>, JsonRejection>,
) -> impl IntoResponse {
    let Json(device) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let device_id = device.device_id;
    state.store.register_device(device).await;
    tracing::info!(device_id, "device registered");

    (
        StatusCode::CREATED,
        format!("Device {device_id} registered."),
    )
        .into_response()
}

#[cfg(test)]
mod register_device_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
    use crate::shell::state::AppState;

    use super::handle;

    fn make_test_state() -> (AppState, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::new());
        (
            AppState {
                store: store.clone(),
            },
            store,
        )
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/register-device", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_201_with_a_confirmation_on_valid_request() {
        let (state, store) = make_test_state();
        let body = r#"{"deviceId":1,"deviceName":"sensor-A","deviceType":"temp","location":"room1"}"#;

        let response = app(state)
            .oneshot(
                Request::post("/register-device")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Device 1 registered.");
        assert_eq!(store.device_count().await, 1);
    }

    #[tokio::test]
    async fn it_should_store_a_second_entry_when_the_same_device_registers_twice() {
        let (state, store) = make_test_state();
        let body = r#"{"deviceId":1,"deviceName":"sensor-A","deviceType":"temp","location":"room1"}"#;
        let router = app(state);

        for _ in 0..2 {
            let response = router
                .clone()
                .oneshot(
                    Request::post("/register-device")
                        .header("content-type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        assert_eq!(store.device_count().await, 2);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let (state, _) = make_test_state();

        let response = app(state)
            .oneshot(
                Request::post("/register-device")
                    .header("content-type", "application/json")
                    .body(Body::from("not-json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_422_when_a_field_is_missing() {
        let (state, store) = make_test_state();
        let body = r#"{"deviceId":1,"deviceName":"sensor-A"}"#;

        let response = app(state)
            .oneshot(
                Request::post("/register-device")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(store.device_count().await, 0);
    }
}
