//! ayursutra-storage
//!
//! JSON record persistence on the local filesystem. Records are addressed
//! by the key conventions in `ayursutra_core::store_keys` and written
//! atomically, so a crash never leaves a half-written record behind.

pub mod error;
pub mod records;
pub mod store;

pub use error::StorageError;
pub use store::Store;
