//! Create / read / update sequencing over a [`PatientStore`].
//!
//! Each operation is one load-mutate-save cycle on the whole mapping.

use std::sync::Arc;

use patients_core::error::CoreError;
use patients_core::patient::{self, NewPatient, Patient, PatientRecord, PatientUpdate};
use patients_core::types::{PatientId, PatientMap};
use tokio::sync::Mutex;

use crate::store::{PatientStore, StoreError};

const ENTITY: &str = "Patient";

/// Provides create, read, and update operations for patients.
///
/// Mutating operations hold `write_lock` across their load-mutate-save
/// cycle, so two requests in this process cannot clobber each other.
/// Other processes writing the same file are not coordinated with.
pub struct PatientRepo {
    store: Arc<dyn PatientStore>,
    write_lock: Mutex<()>,
}

impl PatientRepo {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &dyn PatientStore {
        self.store.as_ref()
    }

    /// Every stored patient, keyed by id.
    pub async fn list_all(&self) -> Result<PatientMap, StoreError> {
        self.store.load().await
    }

    /// Fetch one patient, or `NotFound`.
    pub async fn find_by_id(&self, id: &str) -> Result<Patient, StoreError> {
        let mut patients = self.store.load().await?;
        patients.remove(id).ok_or_else(|| not_found(id))
    }

    /// Validate and store a new patient. Fails with `DuplicateId` if the id
    /// is already taken.
    pub async fn create(&self, input: NewPatient) -> Result<PatientRecord, StoreError> {
        let _guard = self.write_lock.lock().await;

        if self.store.exists(&input.id).await? {
            return Err(CoreError::DuplicateId {
                entity: ENTITY,
                id: input.id,
            }
            .into());
        }

        let record = patient::validate(input)?;
        let mut patients = self.store.load().await?;
        patients.insert(record.id.clone(), record.patient.clone());
        self.store.save(&patients).await?;

        Ok(record)
    }

    /// Merge `patch` into an existing patient and store the result.
    pub async fn update(&self, id: &str, patch: &PatientUpdate) -> Result<Patient, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut patients = self.store.load().await?;
        let existing = patients.get(id).ok_or_else(|| not_found(id))?;

        let merged = patient::apply_patch(existing, patch)?;
        patients.insert(id.to_string(), merged.clone());
        self.store.save(&patients).await?;

        Ok(merged)
    }
}

fn not_found(id: &str) -> StoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: PatientId::from(id),
    }
    .into()
}
