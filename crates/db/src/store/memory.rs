use async_trait::async_trait;
use patients_core::types::PatientMap;
use tokio::sync::RwLock;

use super::{PatientStore, StoreError};

/// In-process store, used by tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    patients: RwLock<PatientMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing mapping.
    pub fn with_patients(patients: PatientMap) -> Self {
        Self {
            patients: RwLock::new(patients),
        }
    }
}

#[async_trait]
impl PatientStore for MemoryStore {
    async fn load(&self) -> Result<PatientMap, StoreError> {
        Ok(self.patients.read().await.clone())
    }

    async fn save(&self, patients: &PatientMap) -> Result<(), StoreError> {
        *self.patients.write().await = patients.clone();
        Ok(())
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.patients.read().await.contains_key(id))
    }
}
