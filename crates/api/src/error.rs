use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use patients_core::error::CoreError;
use patients_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `patients_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The patient store could not be read or written.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            other => AppError::Store(other),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation {
                    field,
                    reason,
                    violations,
                } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    json!({
                        "error": format!("{field} {reason}"),
                        "code": "VALIDATION_ERROR",
                        "field": field,
                        "violations": violations,
                    }),
                ),
                CoreError::DuplicateId { entity, id } => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": format!("{entity} with id {id} already exists"),
                        "code": "DUPLICATE_ID",
                    }),
                ),
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": format!("{entity} with id {id} not found"),
                        "code": "NOT_FOUND",
                    }),
                ),
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Patient store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "STORE_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
