use serde::Serialize;

use crate::types::PatientId;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input violated one or more declared field constraints.
    ///
    /// `field` and `reason` describe the first violation (in field
    /// declaration order); `violations` holds all of them.
    #[error("Validation failed: {field} {reason}")]
    Validation {
        field: String,
        reason: String,
        violations: Vec<FieldViolation>,
    },

    #[error("Entity already exists: {entity} with id {id}")]
    DuplicateId { entity: &'static str, id: PatientId },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: PatientId },
}

impl CoreError {
    /// Build a validation error for a single field.
    pub fn invalid_field(field: &str, reason: impl Into<String>) -> Self {
        Self::from_violations(vec![FieldViolation {
            field: field.to_string(),
            reason: reason.into(),
        }])
    }

    /// Build a validation error from a non-empty list of violations.
    ///
    /// The first entry becomes the primary `field` / `reason`.
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        let (field, reason) = violations
            .first()
            .map(|v| (v.field.clone(), v.reason.clone()))
            .unwrap_or_else(|| ("unknown".to_string(), "is invalid".to_string()));

        Self::Validation {
            field,
            reason,
            violations,
        }
    }
}
