//! Persistence for the id -> patient mapping.
//!
//! Every access is whole-mapping: callers `load` everything, mutate in
//! memory, and `save` everything back.

mod file;
mod memory;

use async_trait::async_trait;
use patients_core::error::CoreError;
use patients_core::types::PatientMap;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error raised while processing a stored record.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing file could not be read or written.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid patient mapping.
    #[error("Store data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Whole-mapping storage backend.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Read the full mapping. A store with no data yields an empty map.
    async fn load(&self) -> Result<PatientMap, StoreError>;

    /// Replace the full mapping.
    async fn save(&self, patients: &PatientMap) -> Result<(), StoreError>;

    /// Whether a patient with `id` is currently stored.
    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.load().await?.contains_key(id))
    }
}
