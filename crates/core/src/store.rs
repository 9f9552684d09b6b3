//! Telemetry store capability.
//!
//! The query layer only needs these four reads. The PostgreSQL adapter lives
//! in `pcre-db`; [`crate::memory_store::MemoryTelemetryStore`] is the
//! in-process implementation used by tests and local runs.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{CapacitorId, ReadingId};

/// A raw transient reading row, waveforms still JSON-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingRow {
    pub reading_id: ReadingId,
    pub serial_date: f64,
    pub v_load: Option<String>,
    pub v_out: Option<String>,
}

/// Read-only access to the transient readings of each capacitor.
///
/// Implementations hold no per-call state: every method acquires whatever
/// store resource it needs and releases it before returning, on success and
/// on failure alike. Nothing is retried.
#[async_trait]
pub trait TelemetryStore: Send + Sync {
    /// Up to `limit` readings ordered by serial date, earliest first, with
    /// both waveforms populated.
    async fn fetch_window(
        &self,
        capacitor_id: CapacitorId,
        limit: i64,
    ) -> Result<Vec<ReadingRow>, StoreError>;

    /// Every reading whose mean output voltage (present samples only, `0`
    /// when none) is strictly below `threshold`, earliest first.
    async fn fetch_below_threshold(
        &self,
        capacitor_id: CapacitorId,
        threshold: f64,
    ) -> Result<Vec<ReadingRow>, StoreError>;

    /// The reading with the greatest serial date. Only `v_out` is required
    /// to be populated.
    async fn fetch_latest(&self, capacitor_id: CapacitorId)
        -> Result<Option<ReadingRow>, StoreError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), StoreError>;
}
