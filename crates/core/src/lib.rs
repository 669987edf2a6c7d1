//! Domain logic for the patient records service.
//!
//! No I/O lives here: stores and HTTP handlers depend on this crate for
//! the record model, derived vitals, and the shared error type.

pub mod error;
pub mod patient;
pub mod types;
