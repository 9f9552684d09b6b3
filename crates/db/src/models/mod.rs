//! Row models for the `prognostics` schema.

pub mod transient_reading;
