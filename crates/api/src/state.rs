use std::sync::Arc;

use pcre_core::store::TelemetryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Telemetry store (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn TelemetryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
