/// Capacitor identifiers are PostgreSQL INTEGER (`prognostics.capacitors.cap_id`).
pub type CapacitorId = i32;

/// Reading identifiers are PostgreSQL BIGSERIAL.
pub type ReadingId = i64;

/// Calendar timestamps derived from serial dates carry no timezone.
pub type CalendarDate = chrono::NaiveDateTime;
