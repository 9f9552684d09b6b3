pub mod capacitor;
pub mod health;
pub mod openapi;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /capacitors/{id}                  reading history (?limit=)
/// /capacitors/{id}/alerts           low-voltage readings (?threshold=)
/// /capacitors/{id}/status           latest health snapshot
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/capacitors", capacitor::router())
}
