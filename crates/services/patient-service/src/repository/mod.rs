//! Repository layer for data access.

pub mod entities;
mod patient_repository;

pub use patient_repository::{PatientRepository, PatientStore};

#[cfg(any(test, feature = "test-utils"))]
pub use patient_repository::MockPatientRepository;
