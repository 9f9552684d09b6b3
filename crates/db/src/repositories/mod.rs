//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod transient_reading_repo;

pub use transient_reading_repo::TransientReadingRepo;
