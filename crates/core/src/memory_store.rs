//! In-memory [`TelemetryStore`].
//!
//! Mirrors the PostgreSQL adapter's ordering and filtering so the query layer
//! and the HTTP boundary can be exercised without a database.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::reading::Waveform;
use crate::store::{ReadingRow, TelemetryStore};
use crate::types::CapacitorId;

#[derive(Debug, Default)]
pub struct MemoryTelemetryStore {
    readings: RwLock<HashMap<CapacitorId, Vec<ReadingRow>>>,
    unavailable: AtomicBool,
}

impl MemoryTelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading for a capacitor (the ingestion side).
    pub async fn insert(&self, capacitor_id: CapacitorId, row: ReadingRow) {
        self.readings
            .write()
            .await
            .entry(capacitor_id)
            .or_default()
            .push(row);
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }

    /// Snapshot of a capacitor's readings, earliest first.
    async fn sorted_rows(&self, capacitor_id: CapacitorId) -> Vec<ReadingRow> {
        let mut rows = self
            .readings
            .read()
            .await
            .get(&capacitor_id)
            .cloned()
            .unwrap_or_default();
        rows.sort_by(by_serial_date);
        rows
    }
}

fn by_serial_date(a: &ReadingRow, b: &ReadingRow) -> Ordering {
    a.serial_date.total_cmp(&b.serial_date)
}

#[async_trait]
impl TelemetryStore for MemoryTelemetryStore {
    async fn fetch_window(
        &self,
        capacitor_id: CapacitorId,
        limit: i64,
    ) -> Result<Vec<ReadingRow>, StoreError> {
        self.check_available()?;
        let take = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let mut rows = self.sorted_rows(capacitor_id).await;
        rows.truncate(take);
        Ok(rows)
    }

    async fn fetch_below_threshold(
        &self,
        capacitor_id: CapacitorId,
        threshold: f64,
    ) -> Result<Vec<ReadingRow>, StoreError> {
        self.check_available()?;
        let rows = self
            .sorted_rows(capacitor_id)
            .await
            .into_iter()
            .filter(|row| Waveform::new(row.v_out.clone()).mean() < threshold)
            .collect();
        Ok(rows)
    }

    async fn fetch_latest(
        &self,
        capacitor_id: CapacitorId,
    ) -> Result<Option<ReadingRow>, StoreError> {
        self.check_available()?;
        let latest = self
            .sorted_rows(capacitor_id)
            .await
            .into_iter()
            .last()
            .map(|row| ReadingRow {
                v_load: None,
                ..row
            });
        Ok(latest)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}
