//! Patient intake business logic.

mod patient_service;

pub use patient_service::{PatientManager, PatientService};
