use crate::types::CapacitorId;

/// Failure raised by a telemetry store.
///
/// Distinct from "no rows": an empty result is returned as `Ok` with an empty
/// collection or `None`, never as a `StoreError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached (connection refused, pool exhausted or closed).
    #[error("Telemetry store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the query failed (execution, decode, schema mismatch).
    #[error("Telemetry query failed: {0}")]
    QueryFailed(String),
}

/// Domain-level error returned by the query layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The capacitor has no readings. Raised by callers that must turn an
    /// empty result into an explicit absence; the query layer itself returns
    /// empty collections.
    #[error("No telemetry data found for Capacitor ID {capacitor_id}")]
    NoTelemetry { capacitor_id: CapacitorId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
