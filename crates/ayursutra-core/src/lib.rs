//! ayursutra-core
//!
//! Pure domain types and record-key conventions. No I/O — this is the
//! shared vocabulary of the AyurSutra system.

pub mod error;
pub mod models;
pub mod store_keys;
