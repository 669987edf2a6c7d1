use std::collections::BTreeMap;

use crate::patient::Patient;

/// Patient identifiers are caller-chosen strings (e.g. `"P1"`).
pub type PatientId = String;

/// The full id -> record mapping held by a store.
///
/// Ordered so `/view` output and the persisted file are stable.
pub type PatientMap = BTreeMap<PatientId, Patient>;
