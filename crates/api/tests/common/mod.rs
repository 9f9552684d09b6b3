#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pcre_api::config::ServerConfig;
use pcre_api::router::build_app_router;
use pcre_api::state::AppState;
use pcre_core::memory_store::MemoryTelemetryStore;
use pcre_core::store::ReadingRow;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        serve_openapi: false,
    }
}

/// Build the full application router over the given in-memory store.
///
/// Goes through `build_app_router` so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app(store: Arc<MemoryTelemetryStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Like [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with_config(store: Arc<MemoryTelemetryStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A reading row with a fixed load waveform.
pub fn reading(reading_id: i64, serial_date: f64, v_out: Option<&str>) -> ReadingRow {
    ReadingRow {
        reading_id,
        serial_date,
        v_load: Some("[0.9, null, 1.1]".to_string()),
        v_out: v_out.map(str::to_string),
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
