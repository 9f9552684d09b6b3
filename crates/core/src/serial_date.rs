//! MATLAB serial date conversion.
//!
//! The upstream data producer stamps every reading with a MATLAB-style
//! serial day count. Calendar time is recovered as
//! `0001-01-01 + (serial - 367) days`.

use chrono::{NaiveDate, TimeDelta};

use crate::types::CalendarDate;

/// Epoch-alignment offset between the producer's serial day count and
/// `0001-01-01`. Every timestamp shifts by a constant if this changes.
pub const SERIAL_DATE_OFFSET_DAYS: f64 = 367.0;

const NANOS_PER_DAY: f64 = 86_400_000_000_000.0;

/// Convert a serial date into a calendar timestamp.
///
/// Whole days and the fractional day are converted separately so the
/// time of day keeps nanosecond resolution (rounded half away from zero)
/// at any serial date. Distinct serial dates therefore never collapse onto
/// the same timestamp. Returns `None` for non-finite input or when the
/// result falls outside the representable calendar range.
pub fn to_calendar(serial_date: f64) -> Option<CalendarDate> {
    let days = serial_date - SERIAL_DATE_OFFSET_DAYS;
    if !days.is_finite() {
        return None;
    }

    let whole_days = days.floor();
    if whole_days.abs() >= i64::MAX as f64 {
        return None;
    }
    let nanos = ((days - whole_days) * NANOS_PER_DAY).round() as i64;

    let base = NaiveDate::from_ymd_opt(1, 1, 1)?.and_hms_opt(0, 0, 0)?;
    base.checked_add_signed(TimeDelta::try_days(whole_days as i64)?)?
        .checked_add_signed(TimeDelta::nanoseconds(nanos))
}
