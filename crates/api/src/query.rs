//! Query parameter types for the capacitor endpoints.

use serde::Deserialize;

/// `?limit=` for the history endpoint. Defaults to
/// [`pcre_core::prognostics::DEFAULT_HISTORY_LIMIT`] in the query layer.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

/// `?threshold=` (volts) for the alerts endpoint. Defaults to
/// [`pcre_core::prognostics::DEFAULT_ALERT_THRESHOLD_VOLTS`] in the query layer.
#[derive(Debug, Default, Deserialize)]
pub struct AlertParams {
    pub threshold: Option<f64>,
}
