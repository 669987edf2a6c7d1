//! Handlers for patient records.
//!
//! Provides listing, lookup, creation, and partial update. Bodies are
//! validated and derived fields computed in `patients_core::patient`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use patients_core::patient::{NewPatient, PatientUpdate};

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /view
///
/// Every stored patient, keyed by id.
pub async fn list_patients(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let patients = state.patients.list_all().await?;

    Ok(Json(patients))
}

/// GET /view/{id}
pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let patient = state.patients.find_by_id(&id).await?;

    Ok(Json(patient))
}

/// POST /createp
///
/// 400 if the id is taken, 422 if a field constraint fails.
pub async fn create_patient(
    State(state): State<AppState>,
    Json(input): Json<NewPatient>,
) -> AppResult<impl IntoResponse> {
    let record = state.patients.create(input).await?;

    tracing::info!(
        patient_id = %record.id,
        bmi = record.patient.bmi,
        condition = ?record.patient.condition,
        "Patient created",
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Patient successfully created")),
    ))
}

/// PUT /edit/{id}
///
/// Apply only the provided fields, then recompute `bmi` and `condition`.
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PatientUpdate>,
) -> AppResult<impl IntoResponse> {
    let patient = state.patients.update(&id, &patch).await?;

    tracing::info!(
        patient_id = %id,
        bmi = patient.bmi,
        condition = ?patient.condition,
        "Patient updated",
    );

    Ok(Json(MessageResponse::new("Patient successfully updated")))
}
