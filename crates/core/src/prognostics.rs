//! Prognostics queries over a [`TelemetryStore`].
//!
//! Each operation is a single point-in-time read. An empty result is a value
//! (`Vec::new()` / `None`), never an error; only store failures and invalid
//! parameters produce a [`CoreError`].

use crate::error::CoreError;
use crate::reading::Reading;
use crate::store::TelemetryStore;
use crate::types::CapacitorId;

/// Window size used when the caller does not supply one.
pub const DEFAULT_HISTORY_LIMIT: i64 = 100;

/// Alert threshold in volts used when the caller does not supply one.
pub const DEFAULT_ALERT_THRESHOLD_VOLTS: f64 = 4.0;

/// Earliest readings for a capacitor, at most `limit` of them.
pub async fn get_capacitor_data(
    store: &dyn TelemetryStore,
    capacitor_id: CapacitorId,
    limit: Option<i64>,
) -> Result<Vec<Reading>, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    if limit < 1 {
        return Err(CoreError::Validation(format!(
            "limit must be a positive integer, got {limit}"
        )));
    }

    tracing::debug!(capacitor_id, limit, "Fetching capacitor history");
    let rows = store.fetch_window(capacitor_id, limit).await?;

    tracing::debug!(capacitor_id, count = rows.len(), "Capacitor history fetched");
    Ok(rows.into_iter().map(Reading::from).collect())
}

/// All readings whose average output voltage is strictly below `threshold`.
pub async fn get_readings_below_threshold(
    store: &dyn TelemetryStore,
    capacitor_id: CapacitorId,
    threshold: Option<f64>,
) -> Result<Vec<Reading>, CoreError> {
    let threshold = threshold.unwrap_or(DEFAULT_ALERT_THRESHOLD_VOLTS);
    if !threshold.is_finite() {
        return Err(CoreError::Validation(format!(
            "threshold must be a finite number, got {threshold}"
        )));
    }

    tracing::debug!(capacitor_id, threshold, "Fetching low-voltage readings");
    let rows = store.fetch_below_threshold(capacitor_id, threshold).await?;

    tracing::debug!(capacitor_id, count = rows.len(), "Low-voltage readings fetched");
    Ok(rows.into_iter().map(Reading::from).collect())
}

/// The most recent reading, or `None` if the capacitor has no readings.
pub async fn get_latest_status(
    store: &dyn TelemetryStore,
    capacitor_id: CapacitorId,
) -> Result<Option<Reading>, CoreError> {
    tracing::debug!(capacitor_id, "Fetching latest reading");
    let row = store.fetch_latest(capacitor_id).await?;

    Ok(row.map(Reading::from))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
