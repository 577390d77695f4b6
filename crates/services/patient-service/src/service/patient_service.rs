//! Patient service - Intake and lookup of patients.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::client::AffiliationService;
use crate::repository::PatientRepository;
use common::{AppError, AppResult};
use domain::{
    Address, Affiliation, CreatePatient, Cuil, Patient, PatientResponse, NOT_AFFILIATED_MESSAGE,
    PARTIAL_AFFILIATION_MESSAGE, UNKNOWN_SOCIAL_WORK_MESSAGE,
};

/// Patient service trait for dependency injection.
#[async_trait]
pub trait PatientService: Send + Sync {
    /// Register a new patient, verifying its social work coverage if declared
    async fn add_patient(&self, data: CreatePatient) -> AppResult<PatientResponse>;

    /// List patients whose CUIL starts with `cuil`
    async fn get_by_cuil(&self, cuil: &str) -> AppResult<Vec<PatientResponse>>;
}

/// Concrete implementation of PatientService.
pub struct PatientManager {
    patients: Arc<dyn PatientRepository>,
    affiliations: Arc<dyn AffiliationService>,
}

impl PatientManager {
    /// Create new patient service instance
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        affiliations: Arc<dyn AffiliationService>,
    ) -> Self {
        Self {
            patients,
            affiliations,
        }
    }

    /// Confirm a declared social work and affiliate number with the registry.
    async fn verify_affiliation(
        &self,
        social_work: Option<&str>,
        affiliate_number: Option<&str>,
    ) -> AppResult<Option<Affiliation>> {
        let (social_work, affiliate_number) = match (social_work, affiliate_number) {
            (None, None) => return Ok(None),
            (Some(social_work), Some(number)) => (social_work, number),
            _ => return Err(AppError::invalid_input(PARTIAL_AFFILIATION_MESSAGE)),
        };

        if !self.affiliations.social_work_exists(social_work).await? {
            return Err(AppError::conflict(UNKNOWN_SOCIAL_WORK_MESSAGE));
        }
        if !self.affiliations.is_affiliated(affiliate_number).await? {
            return Err(AppError::conflict(NOT_AFFILIATED_MESSAGE));
        }

        Ok(Some(Affiliation::new(social_work, affiliate_number)))
    }
}

fn already_registered(cuil: &str) -> AppError {
    AppError::conflict(format!(
        "The patient with CUIL {} is already registered.",
        cuil
    ))
}

/// Blank strings count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl PatientService for PatientManager {
    async fn add_patient(&self, data: CreatePatient) -> AppResult<PatientResponse> {
        let raw_cuil = data.cuil.as_deref().unwrap_or("");

        // Best effort; the unique constraint on the CUIL is the authority
        let existing = self.patients.find_by_cuil(raw_cuil).await?;
        if existing.iter().any(|p| p.cuil.as_str() == raw_cuil) {
            return Err(already_registered(raw_cuil));
        }

        let affiliation = self
            .verify_affiliation(present(&data.social_work), present(&data.affiliate_number))
            .await?;

        let cuil = Cuil::parse_optional(data.cuil.as_deref())?;

        let patient = Patient::new(
            cuil,
            data.name,
            data.last_name,
            data.email,
            Address {
                street: data.street,
                number: data.number,
                locality: data.locality,
            },
            affiliation,
        );

        match self.patients.create(patient).await? {
            Some(created) => {
                info!(
                    patient_id = %created.id,
                    affiliated = created.is_affiliated(),
                    "Patient registered"
                );
                Ok(PatientResponse::from(created))
            }
            None => {
                warn!("Patient was not stored: CUIL already registered");
                Err(already_registered(raw_cuil))
            }
        }
    }

    async fn get_by_cuil(&self, cuil: &str) -> AppResult<Vec<PatientResponse>> {
        let patients = self.patients.find_by_cuil(cuil).await?;
        debug!(matches = patients.len(), "Patient lookup by CUIL");

        if patients.is_empty() {
            return Err(AppError::not_found(format!(
                "There are no registered patients matching CUIL {}.",
                cuil
            )));
        }

        Ok(patients.into_iter().map(PatientResponse::from).collect())
    }
}
