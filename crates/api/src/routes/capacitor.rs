//! Route definitions for capacitor telemetry endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::capacitor;
use crate::state::AppState;

/// Routes mounted at `/capacitors`.
///
/// ```text
/// GET /{id}            -> get_capacitor_data
/// GET /{id}/alerts     -> get_alerts
/// GET /{id}/status     -> get_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(capacitor::get_capacitor_data))
        .route("/{id}/alerts", get(capacitor::get_alerts))
        .route("/{id}/status", get(capacitor::get_status))
}
