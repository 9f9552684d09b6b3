//! Domain core for capacitor prognostics.
//!
//! Scoring, serial date conversion, the Reading record and the query layer.
//! No database or HTTP dependencies; stores are reached through
//! [`store::TelemetryStore`].

pub mod error;
pub mod memory_store;
pub mod prognostics;
pub mod reading;
pub mod scoring;
pub mod serial_date;
pub mod store;
pub mod types;
