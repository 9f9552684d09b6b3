//! Repository for the `prognostics.transient_readings` table (read-only).

use pcre_core::types::CapacitorId;
use sqlx::PgPool;

use crate::models::transient_reading::TransientReading;

/// Column list with both waveforms converted to JSON text.
const COLUMNS: &str = "\
    reading_id, serial_date, \
    array_to_json(v_load)::text AS v_load, \
    array_to_json(v_out)::text AS v_out";

/// Provides query operations for transient readings.
pub struct TransientReadingRepo;

impl TransientReadingRepo {
    /// Earliest `limit` readings for a capacitor.
    pub async fn list_window(
        pool: &PgPool,
        capacitor_id: CapacitorId,
        limit: i64,
    ) -> Result<Vec<TransientReading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prognostics.transient_readings \
             WHERE cap_id = $1 \
             ORDER BY serial_date ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, TransientReading>(&query)
            .bind(capacitor_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Every reading whose mean `v_out` is strictly below `threshold`.
    ///
    /// `AVG` skips NULL elements; a window with no samples averages to `0`.
    pub async fn list_below_threshold(
        pool: &PgPool,
        capacitor_id: CapacitorId,
        threshold: f64,
    ) -> Result<Vec<TransientReading>, sqlx::Error> {
        let query = format!(
            "SELECT reading_id, serial_date, v_load, v_out FROM ( \
                 SELECT {COLUMNS}, \
                     COALESCE((SELECT AVG(val) FROM unnest(t.v_out) AS val), 0) AS computed_avg \
                 FROM prognostics.transient_readings t \
                 WHERE cap_id = $1 \
             ) AS sub \
             WHERE computed_avg < $2 \
             ORDER BY serial_date ASC"
        );
        sqlx::query_as::<_, TransientReading>(&query)
            .bind(capacitor_id)
            .bind(threshold)
            .fetch_all(pool)
            .await
    }

    /// The reading with the greatest serial date. `v_load` is not selected.
    pub async fn find_latest(
        pool: &PgPool,
        capacitor_id: CapacitorId,
    ) -> Result<Option<TransientReading>, sqlx::Error> {
        let query = "\
            SELECT reading_id, serial_date, \
                NULL::text AS v_load, \
                array_to_json(v_out)::text AS v_out \
            FROM prognostics.transient_readings \
            WHERE cap_id = $1 \
            ORDER BY serial_date DESC \
            LIMIT 1";
        sqlx::query_as::<_, TransientReading>(query)
            .bind(capacitor_id)
            .fetch_optional(pool)
            .await
    }
}
