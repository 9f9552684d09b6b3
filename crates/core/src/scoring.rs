//! Capacitor health scoring.
//!
//! Pure functions that turn a window of output-voltage samples into an
//! average voltage, a normalized health index and a status tier. Nothing in
//! here touches the store; the Reading record and the in-memory store both
//! call into these so the numbers agree everywhere.

use std::fmt;

use serde::Serialize;

/// Nominal output voltage for this capacitor class. A window averaging this
/// value (or more) scores a health index of exactly `1.0`.
pub const NOMINAL_BASELINE_VOLTS: f64 = 4.8;

/// Lowest health index still classified as [`StatusTier::Nominal`].
pub const NOMINAL_MIN_INDEX: f64 = 0.95;

/// Lowest health index still classified as [`StatusTier::Degraded`].
pub const DEGRADED_MIN_INDEX: f64 = 0.85;

/// Health classification derived from a health index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusTier {
    Nominal,
    Degraded,
    Critical,
}

impl StatusTier {
    /// The label exposed to dashboards.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusTier::Nominal => "Nominal",
            StatusTier::Degraded => "Degraded",
            StatusTier::Critical => "Critical",
        }
    }
}

impl fmt::Display for StatusTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arithmetic mean of the samples that are present.
///
/// Missing samples (`None`) are skipped. Returns `0.0` when no sample is
/// present, including for an empty slice.
pub fn mean_of_present(samples: &[Option<f64>]) -> f64 {
    let (sum, count) = samples
        .iter()
        .flatten()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Normalize an average voltage against [`NOMINAL_BASELINE_VOLTS`].
///
/// Capped at `1.0`. There is no lower bound: a negative average yields a
/// negative index.
pub fn health_index(avg_voltage: f64) -> f64 {
    let ratio = avg_voltage / NOMINAL_BASELINE_VOLTS;
    // `f64::min` would turn NaN into 1.0.
    if ratio > 1.0 {
        1.0
    } else {
        ratio
    }
}

/// Classify a health index, checking the tiers from best to worst.
pub fn classify(health_index: f64) -> StatusTier {
    if health_index >= NOMINAL_MIN_INDEX {
        StatusTier::Nominal
    } else if health_index >= DEGRADED_MIN_INDEX {
        StatusTier::Degraded
    } else {
        StatusTier::Critical
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
