//! Route definitions for patient records.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::patients;
use crate::state::AppState;

/// Patient routes, mounted at the root.
///
/// ```text
/// GET    /view              -> list_patients
/// GET    /view/{id}         -> get_patient
/// POST   /createp           -> create_patient
/// PUT    /edit/{id}         -> update_patient
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/view", get(patients::list_patients))
        .route("/view/{id}", get(patients::get_patient))
        .route("/createp", post(patients::create_patient))
        .route("/edit/{id}", put(patients::update_patient))
}
