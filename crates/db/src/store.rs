//! [`TelemetryStore`] backed by a PostgreSQL pool.
//!
//! Every call checks out one pooled connection for a single statement; the
//! connection goes back to the pool when the query future completes or is
//! dropped.

use async_trait::async_trait;
use pcre_core::error::StoreError;
use pcre_core::store::{ReadingRow, TelemetryStore};
use pcre_core::types::CapacitorId;

use crate::repositories::TransientReadingRepo;
use crate::DbPool;

#[derive(Debug, Clone)]
pub struct PgTelemetryStore {
    pool: DbPool,
}

impl PgTelemetryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Split sqlx failures into "could not reach the store" and "query failed".
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
        other => StoreError::QueryFailed(other.to_string()),
    }
}

#[async_trait]
impl TelemetryStore for PgTelemetryStore {
    async fn fetch_window(
        &self,
        capacitor_id: CapacitorId,
        limit: i64,
    ) -> Result<Vec<ReadingRow>, StoreError> {
        let rows = TransientReadingRepo::list_window(&self.pool, capacitor_id, limit)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(ReadingRow::from).collect())
    }

    async fn fetch_below_threshold(
        &self,
        capacitor_id: CapacitorId,
        threshold: f64,
    ) -> Result<Vec<ReadingRow>, StoreError> {
        let rows = TransientReadingRepo::list_below_threshold(&self.pool, capacitor_id, threshold)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(rows.into_iter().map(ReadingRow::from).collect())
    }

    async fn fetch_latest(
        &self,
        capacitor_id: CapacitorId,
    ) -> Result<Option<ReadingRow>, StoreError> {
        let row = TransientReadingRepo::find_latest(&self.pool, capacitor_id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(ReadingRow::from))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(classify_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pool_exhaustion_is_unavailable() {
        assert_matches!(
            classify_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        );
        assert_matches!(
            classify_sqlx_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        );
    }

    #[test]
    fn decode_problems_are_query_failures() {
        assert_matches!(
            classify_sqlx_error(sqlx::Error::ColumnNotFound("v_out".into())),
            StoreError::QueryFailed(_)
        );
        assert_matches!(
            classify_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::QueryFailed(_)
        );
    }
}
