use std::sync::Arc;

use patients_db::repositories::PatientRepo;
use patients_db::PatientStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the repository sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Patient operations over the configured store.
    pub patients: Arc<PatientRepo>,
}

impl AppState {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self {
            patients: Arc::new(PatientRepo::new(store)),
        }
    }
}
