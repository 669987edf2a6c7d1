//! Patient record model: field constraints, derived vitals, and partial updates.
//!
//! Everything here is pure. Stores and HTTP handlers call into this module
//! to turn raw payloads into fully-derived [`Patient`] values.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{CoreError, FieldViolation};
use crate::types::PatientId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// BMI strictly below this value is classified as underweight.
pub const UNDERWEIGHT_BELOW: f64 = 18.5;

/// BMI strictly below this value (and strictly above [`UNDERWEIGHT_BELOW`])
/// is classified as normal.
pub const NORMAL_BELOW: f64 = 24.5;

/// Field declaration order, used to pick the primary violation.
const FIELD_ORDER: &[&str] = &["id", "name", "age", "gender", "weight", "height"];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Weight classification derived from BMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Underweight,
    Normal,
    Obese,
}

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A stored patient, keyed externally by its id.
///
/// `bmi` and `condition` are always derived from `weight` / `height`;
/// construct through [`Patient::from_vitals`], [`validate`] or
/// [`apply_patch`] so they stay consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Patient {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(
        exclusive_min = 0,
        exclusive_max = 100,
        message = "must be greater than 0 and less than 100"
    ))]
    pub age: i64,
    pub gender: Gender,
    /// Kilograms.
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub weight: f64,
    /// Metres.
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub height: f64,
    pub bmi: f64,
    pub condition: Condition,
}

impl Patient {
    /// Build a patient from its vitals, deriving `bmi` and `condition`.
    pub fn from_vitals(name: String, age: i64, gender: Gender, weight: f64, height: f64) -> Self {
        let bmi = compute_bmi(weight, height);
        Self {
            name,
            age,
            gender,
            weight,
            height,
            bmi,
            condition: compute_condition(bmi),
        }
    }

    /// Recompute `bmi` and `condition` from the current `weight` / `height`.
    fn rederive(&mut self) {
        self.bmi = compute_bmi(self.weight, self.height);
        self.condition = compute_condition(self.bmi);
    }
}

/// A validated patient together with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub id: PatientId,
    pub patient: Patient,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Payload for creating a patient. Derived fields are not accepted; any
/// `bmi` / `condition` keys in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPatient {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub id: PatientId,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(
        exclusive_min = 0,
        exclusive_max = 100,
        message = "must be greater than 0 and less than 100"
    ))]
    pub age: i64,
    pub gender: Gender,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub weight: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub height: f64,
}

/// Partial update. Absent (or `null`) fields keep their stored value.
/// There is no `id` field: an id in the body is ignored. Constraints are
/// checked on the merged record, not on the patch alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<Gender>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// `weight / height^2`, rounded to 2 decimal places.
///
/// Rounding is done on the exact binary value of the quotient, so
/// `74.02 / 2.0^2` (stored as `18.50499...`) gives `18.5`.
pub fn compute_bmi(weight: f64, height: f64) -> f64 {
    round_2dp(weight / (height * height))
}

/// Classify a BMI value.
///
/// Exactly `18.5` falls outside both the underweight and normal bands and
/// is classified as obese.
pub fn compute_condition(bmi: f64) -> Condition {
    if bmi < UNDERWEIGHT_BELOW {
        Condition::Underweight
    } else if UNDERWEIGHT_BELOW < bmi && bmi < NORMAL_BELOW {
        Condition::Normal
    } else {
        Condition::Obese
    }
}

fn round_2dp(value: f64) -> f64 {
    // Float formatting rounds the exact value; scaling by 100 first would
    // round twice.
    format!("{value:.2}").parse().unwrap_or(value)
}

// ---------------------------------------------------------------------------
// Validation and merge
// ---------------------------------------------------------------------------

/// Check every field constraint on a create payload and derive the
/// computed fields.
pub fn validate(input: NewPatient) -> Result<PatientRecord, CoreError> {
    input.validate().map_err(violations_to_error)?;

    let patient = Patient::from_vitals(
        input.name,
        input.age,
        input.gender,
        input.weight,
        input.height,
    );
    ensure_finite_bmi(&patient)?;

    Ok(PatientRecord {
        id: input.id,
        patient,
    })
}

/// Merge `patch` onto a copy of `existing` and re-derive `bmi` / `condition`.
///
/// Derived fields are recomputed even when neither `weight` nor `height`
/// changed. The merged record must satisfy every field constraint, so a
/// stored record that was already invalid is rejected rather than re-saved.
pub fn apply_patch(existing: &Patient, patch: &PatientUpdate) -> Result<Patient, CoreError> {
    let mut merged = existing.clone();
    if let Some(name) = &patch.name {
        merged.name = name.clone();
    }
    if let Some(age) = patch.age {
        merged.age = age;
    }
    if let Some(gender) = patch.gender {
        merged.gender = gender;
    }
    if let Some(weight) = patch.weight {
        merged.weight = weight;
    }
    if let Some(height) = patch.height {
        merged.height = height;
    }

    merged.validate().map_err(violations_to_error)?;
    merged.rederive();
    ensure_finite_bmi(&merged)?;

    Ok(merged)
}

/// Extremely small heights overflow the BMI to infinity, which JSON cannot
/// represent.
fn ensure_finite_bmi(patient: &Patient) -> Result<(), CoreError> {
    if patient.bmi.is_finite() {
        Ok(())
    } else {
        Err(CoreError::invalid_field(
            "height",
            "produces a BMI that is not a finite number",
        ))
    }
}

fn violations_to_error(errors: ValidationErrors) -> CoreError {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| FieldViolation {
                field: field.clone(),
                reason: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed the '{}' constraint", e.code)),
            })
        })
        .collect();

    violations.sort_by_key(|v| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == v.field)
            .unwrap_or(FIELD_ORDER.len())
    });

    CoreError::from_violations(violations)
}
