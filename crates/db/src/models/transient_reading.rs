//! Transient reading rows (`prognostics.transient_readings`).

use pcre_core::store::ReadingRow;
use pcre_core::types::ReadingId;
use sqlx::FromRow;

/// A transient reading with its array columns rendered as JSON text
/// (`array_to_json(..)::text`).
#[derive(Debug, Clone, FromRow)]
pub struct TransientReading {
    pub reading_id: ReadingId,
    pub serial_date: f64,
    pub v_load: Option<String>,
    pub v_out: Option<String>,
}

impl From<TransientReading> for ReadingRow {
    fn from(row: TransientReading) -> Self {
        ReadingRow {
            reading_id: row.reading_id,
            serial_date: row.serial_date,
            v_load: row.v_load,
            v_out: row.v_out,
        }
    }
}
