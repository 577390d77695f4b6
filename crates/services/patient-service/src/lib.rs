//! Patient Service Library
//!
//! Patient intake and lookup. New patients are checked for duplicates and,
//! when they declare a social work, verified against the affiliation
//! registry before being stored.

pub mod client;
pub mod config;
pub mod repository;
pub mod service;

pub use client::{
    affiliation_service_from_config, AffiliationService, HttpAffiliationClient,
    InMemoryAffiliationRegistry,
};
pub use config::PatientServiceConfig;
pub use repository::{PatientRepository, PatientStore};
pub use service::{PatientManager, PatientService};
