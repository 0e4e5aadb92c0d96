use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::Store;

/// Load a JSON record and deserialize it.
pub async fn load_record<T: DeserializeOwned>(
    store: &Store,
    key: &str,
) -> Result<T, StorageError> {
    let bytes = store.get(key).await?;
    let value: T = serde_json::from_slice(&bytes)?;
    Ok(value)
}

/// Serialize a value and store it as a JSON record.
pub async fn save_record<T: Serialize>(
    store: &Store,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    store.put(key, bytes).await
}

/// Load every JSON record under a prefix. Records that vanish between the
/// listing and the read are skipped rather than failing the whole scan.
pub async fn load_all<T: DeserializeOwned>(
    store: &Store,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;
    let mut records = Vec::with_capacity(keys.len());
    for key in &keys {
        match store.get(key).await {
            Ok(bytes) => records.push(serde_json::from_slice(&bytes)?),
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(records)
}
