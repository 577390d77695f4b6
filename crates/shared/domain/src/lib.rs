//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the auth and patient services and the gateway.

pub mod constants;
pub mod cuil;
pub mod error;
pub mod password;
pub mod patient;
pub mod user;

pub use constants::*;
pub use cuil::Cuil;
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, CredentialHasher, Password};
pub use patient::{
    Address, Affiliation, AffiliationResponse, CreatePatient, Patient, PatientResponse,
};
pub use user::{Employee, EmployeeRole, RegisterUser, User, UserResponse};
