use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use device_events::config::Config;
use device_events::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use device_events::shell::http::router;
use device_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    // Single store for the process lifetime; all routes share it.
    let store = Arc::new(InMemoryRecordStore::new());
    let state = AppState { store };

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
