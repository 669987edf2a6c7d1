pub mod repositories;
pub mod store;

pub use store::{JsonFileStore, MemoryStore, PatientStore, StoreError};

/// Verify the store can be read.
pub async fn health_check(store: &dyn PatientStore) -> Result<(), StoreError> {
    store.load().await.map(|_| ())
}
