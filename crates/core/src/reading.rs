//! Reading record: one stored telemetry sample window for a capacitor.
//!
//! A [`Reading`] is an immutable projection of a store row. Derived values
//! (calendar date, average voltage, health index, status tier) are computed
//! on every call from the stored fields; nothing is cached.

use serde::Serialize;

use crate::scoring::{self, StatusTier};
use crate::serial_date;
use crate::store::ReadingRow;
use crate::types::{CalendarDate, ReadingId};

// ---------------------------------------------------------------------------
// Waveform
// ---------------------------------------------------------------------------

/// A voltage waveform as stored: JSON array text of optional samples.
///
/// Serializes back out as the original text (or `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Waveform(Option<String>);

impl Waveform {
    pub fn new(encoded: Option<String>) -> Self {
        Self(encoded)
    }

    /// The stored JSON text, if any.
    pub fn encoded(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Decode the sample array.
    ///
    /// Returns `None` when the waveform is absent, empty, JSON `null`, or not
    /// an array of numbers/nulls. Malformed telemetry is never an error.
    pub fn samples(&self) -> Option<Vec<Option<f64>>> {
        let text = self.0.as_deref().filter(|t| !t.is_empty())?;
        match serde_json::from_str::<Option<Vec<Option<f64>>>>(text) {
            Ok(samples) => samples,
            Err(err) => {
                tracing::trace!(error = %err, "Ignoring malformed waveform");
                None
            }
        }
    }

    /// Mean of the present samples, `0.0` when there are none.
    pub fn mean(&self) -> f64 {
        self.samples()
            .map(|samples| scoring::mean_of_present(&samples))
            .unwrap_or(0.0)
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    reading_id: ReadingId,
    serial_date: f64,
    v_load: Waveform,
    v_out: Waveform,
}

impl Reading {
    pub fn new(reading_id: ReadingId, serial_date: f64, v_load: Waveform, v_out: Waveform) -> Self {
        Self {
            reading_id,
            serial_date,
            v_load,
            v_out,
        }
    }

    pub fn reading_id(&self) -> ReadingId {
        self.reading_id
    }

    pub fn serial_date(&self) -> f64 {
        self.serial_date
    }

    /// Load-voltage waveform.
    pub fn v_load(&self) -> &Waveform {
        &self.v_load
    }

    /// Output-voltage waveform. All health scoring is based on this one.
    pub fn v_out(&self) -> &Waveform {
        &self.v_out
    }

    /// Calendar timestamp of the window, `None` if the serial date is unusable.
    pub fn human_date(&self) -> Option<CalendarDate> {
        serial_date::to_calendar(self.serial_date)
    }

    /// Mean of the present output-voltage samples.
    pub fn avg_voltage(&self) -> f64 {
        self.v_out.mean()
    }

    pub fn health_index(&self) -> f64 {
        scoring::health_index(self.avg_voltage())
    }

    pub fn status(&self) -> StatusTier {
        scoring::classify(self.health_index())
    }

    /// Full projection, as returned by the history and alert queries.
    pub fn to_view(&self) -> ReadingView {
        let avg_voltage = self.avg_voltage();
        let health_index = scoring::health_index(avg_voltage);
        ReadingView {
            reading_id: self.reading_id,
            serial_date: self.serial_date,
            v_load: self.v_load.clone(),
            v_out: self.v_out.clone(),
            human_date: self.human_date(),
            avg_voltage,
            health_index,
            status: scoring::classify(health_index),
        }
    }

    /// Reduced projection for the dashboard status card.
    pub fn to_snapshot(&self) -> StatusSnapshot {
        let avg_voltage = self.avg_voltage();
        let health_index = scoring::health_index(avg_voltage);
        StatusSnapshot {
            reading_id: self.reading_id,
            human_date: self.human_date(),
            avg_voltage,
            health_index,
            status: scoring::classify(health_index),
        }
    }
}

impl From<ReadingRow> for Reading {
    fn from(row: ReadingRow) -> Self {
        Self::new(
            row.reading_id,
            row.serial_date,
            Waveform::new(row.v_load),
            Waveform::new(row.v_out),
        )
    }
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Serialized shape of a full reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingView {
    pub reading_id: ReadingId,
    pub serial_date: f64,
    pub v_load: Waveform,
    pub v_out: Waveform,
    pub human_date: Option<CalendarDate>,
    pub avg_voltage: f64,
    pub health_index: f64,
    pub status: StatusTier,
}

/// Serialized shape of the latest-status snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub reading_id: ReadingId,
    pub human_date: Option<CalendarDate>,
    pub avg_voltage: f64,
    pub health_index: f64,
    pub status: StatusTier,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_with_out(v_out: Option<&str>) -> Reading {
        Reading::new(
            1,
            367.0,
            Waveform::default(),
            Waveform::new(v_out.map(str::to_string)),
        )
    }

    #[test]
    fn nominal_example() {
        let reading = reading_with_out(Some("[4.5, null, 4.7, null]"));
        assert!((reading.avg_voltage() - 4.6).abs() < 1e-12);
        assert!((reading.health_index() - 0.958_333_333_333).abs() < 1e-9);
        assert_eq!(reading.status(), StatusTier::Nominal);
    }

    #[test]
    fn critical_example() {
        let reading = reading_with_out(Some("[3.0, 3.2]"));
        assert!((reading.avg_voltage() - 3.1).abs() < 1e-12);
        assert!((reading.health_index() - 0.645_833_333_333).abs() < 1e-9);
        assert_eq!(reading.status(), StatusTier::Critical);
    }

    #[test]
    fn degraded_example() {
        // 4.32 / 4.8 = 0.9
        let reading = reading_with_out(Some("[4.32]"));
        assert_eq!(reading.status(), StatusTier::Degraded);
    }

    #[test]
    fn missing_waveforms_score_zero() {
        for v_out in [None, Some(""), Some("[]"), Some("[null, null]"), Some("null")] {
            let reading = reading_with_out(v_out);
            assert_eq!(reading.avg_voltage(), 0.0, "v_out = {v_out:?}");
            assert_eq!(reading.health_index(), 0.0);
            assert_eq!(reading.status(), StatusTier::Critical);
        }
    }

    #[test]
    fn malformed_waveforms_score_zero() {
        for v_out in ["not json", "[4.5, \"x\"]", "{\"a\": 1}", "[4.5,"] {
            let reading = reading_with_out(Some(v_out));
            assert_eq!(reading.avg_voltage(), 0.0, "v_out = {v_out:?}");
            assert_eq!(reading.status(), StatusTier::Critical);
        }
    }

    #[test]
    fn derived_values_are_repeatable() {
        let reading = reading_with_out(Some("[4.0, 4.9, null]"));
        let first = (reading.avg_voltage(), reading.health_index(), reading.status());
        let second = (reading.avg_voltage(), reading.health_index(), reading.status());
        assert_eq!(first, second);
    }

    #[test]
    fn load_voltage_does_not_affect_health() {
        let reading = Reading::new(
            7,
            400.0,
            Waveform::new(Some("[1.0, 3.0]".into())),
            Waveform::new(Some("[4.8]".into())),
        );
        assert_eq!(reading.avg_voltage(), 4.8);
        assert_eq!(reading.health_index(), 1.0);
    }

    #[test]
    fn view_serializes_camel_case_fields() {
        let row = ReadingRow {
            reading_id: 42,
            serial_date: 367.5,
            v_load: Some("[1.0]".into()),
            v_out: Some("[4.5, null, 4.7, null]".into()),
        };
        let json = serde_json::to_value(Reading::from(row).to_view()).unwrap();

        assert_eq!(json["readingId"], 42);
        assert_eq!(json["serialDate"], 367.5);
        assert_eq!(json["vLoad"], "[1.0]");
        assert_eq!(json["vOut"], "[4.5, null, 4.7, null]");
        assert_eq!(json["humanDate"], "0001-01-01T12:00:00");
        assert_eq!(json["status"], "Nominal");
        assert!(json["avgVoltage"].is_number());
        assert!(json["healthIndex"].is_number());

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            [
                "avgVoltage",
                "healthIndex",
                "humanDate",
                "readingId",
                "serialDate",
                "status",
                "vLoad",
                "vOut"
            ]
        );
    }

    #[test]
    fn snapshot_has_only_dashboard_fields() {
        let json = serde_json::to_value(reading_with_out(Some("[3.0]")).to_snapshot()).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["avgVoltage", "healthIndex", "humanDate", "readingId", "status"]
        );
        assert_eq!(json["humanDate"], "0001-01-01T00:00:00");
    }

    #[test]
    fn absent_waveform_serializes_as_null() {
        let json = serde_json::to_value(reading_with_out(None).to_view()).unwrap();
        assert!(json["vOut"].is_null());
        assert!(json["vLoad"].is_null());
    }
}
