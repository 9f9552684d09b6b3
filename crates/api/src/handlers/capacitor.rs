//! Handlers for capacitor telemetry endpoints.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use pcre_core::error::CoreError;
use pcre_core::prognostics;
use pcre_core::reading::{Reading, ReadingView, StatusSnapshot};
use pcre_core::types::CapacitorId;

use crate::error::AppResult;
use crate::query::{AlertParams, HistoryParams};
use crate::state::AppState;

/// GET /capacitors/{id}
///
/// Earliest readings for the capacitor (`?limit=`, default 100). Responds 404
/// when the capacitor has no readings at all.
pub async fn get_capacitor_data(
    State(state): State<AppState>,
    capacitor_id: Result<Path<CapacitorId>, PathRejection>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> AppResult<Json<Vec<ReadingView>>> {
    let Path(capacitor_id) = capacitor_id?;
    let Query(params) = params?;
    let readings =
        prognostics::get_capacitor_data(state.store.as_ref(), capacitor_id, params.limit).await?;

    if readings.is_empty() {
        tracing::debug!(capacitor_id, "No telemetry for capacitor");
        return Err(CoreError::NoTelemetry { capacitor_id }.into());
    }

    Ok(Json(readings.iter().map(Reading::to_view).collect()))
}

/// GET /capacitors/{id}/alerts
///
/// Readings averaging strictly below `?threshold=` volts (default 4.0).
/// An empty list is a normal response.
pub async fn get_alerts(
    State(state): State<AppState>,
    capacitor_id: Result<Path<CapacitorId>, PathRejection>,
    params: Result<Query<AlertParams>, QueryRejection>,
) -> AppResult<Json<Vec<ReadingView>>> {
    let Path(capacitor_id) = capacitor_id?;
    let Query(params) = params?;
    let readings = prognostics::get_readings_below_threshold(
        state.store.as_ref(),
        capacitor_id,
        params.threshold,
    )
    .await?;

    Ok(Json(readings.iter().map(Reading::to_view).collect()))
}

/// GET /capacitors/{id}/status
///
/// Health snapshot of the most recent reading.
pub async fn get_status(
    State(state): State<AppState>,
    capacitor_id: Result<Path<CapacitorId>, PathRejection>,
) -> AppResult<Json<StatusSnapshot>> {
    let Path(capacitor_id) = capacitor_id?;
    let latest = prognostics::get_latest_status(state.store.as_ref(), capacitor_id)
        .await?
        .ok_or(CoreError::NoTelemetry { capacitor_id })?;

    Ok(Json(latest.to_snapshot()))
}
