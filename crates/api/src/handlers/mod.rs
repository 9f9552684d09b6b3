//! Request handlers.
//!
//! Handlers delegate to the query layer in `pcre_core::prognostics` and map
//! errors via [`crate::error::AppError`].

pub mod capacitor;
