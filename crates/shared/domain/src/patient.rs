//! Patient domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cuil::Cuil;

/// Postal address of a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub number: i32,
    pub locality: String,
}

/// Link between a patient and a social work (health insurance provider).
///
/// Both parts always travel together; a patient without coverage has no
/// `Affiliation` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliation {
    social_work: String,
    affiliate_number: String,
}

impl Affiliation {
    /// Build an affiliation once the social work and the affiliate number
    /// have both been confirmed.
    pub fn new(social_work: impl Into<String>, affiliate_number: impl Into<String>) -> Self {
        Self {
            social_work: social_work.into(),
            affiliate_number: affiliate_number.into(),
        }
    }

    pub fn social_work(&self) -> &str {
        &self.social_work
    }

    pub fn affiliate_number(&self) -> &str {
        &self.affiliate_number
    }
}

/// Patient domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: Uuid,
    pub cuil: Cuil,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub address: Address,
    pub affiliation: Option<Affiliation>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// Create a new patient
    pub fn new(
        cuil: Cuil,
        name: String,
        last_name: String,
        email: String,
        address: Address,
        affiliation: Option<Affiliation>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            cuil,
            name,
            last_name,
            email,
            address,
            affiliation,
            created_at: Utc::now(),
        }
    }

    /// Check if the patient is covered by a social work
    pub fn is_affiliated(&self) -> bool {
        self.affiliation.is_some()
    }
}

/// Patient intake data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePatient {
    /// National ID, formatted `DD-DDDDDDDD-D`
    pub cuil: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub locality: String,
    /// Social work name; must be sent together with `affiliate_number`
    pub social_work: Option<String>,
    /// Affiliate number; must be sent together with `social_work`
    pub affiliate_number: Option<String>,
}

/// Affiliation as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AffiliationResponse {
    pub social_work: String,
    pub affiliate_number: String,
}

impl From<&Affiliation> for AffiliationResponse {
    fn from(affiliation: &Affiliation) -> Self {
        Self {
            social_work: affiliation.social_work.clone(),
            affiliate_number: affiliation.affiliate_number.clone(),
        }
    }
}

/// Patient response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PatientResponse {
    pub cuil: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub number: i32,
    pub locality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<AffiliationResponse>,
}

impl From<&Patient> for PatientResponse {
    fn from(patient: &Patient) -> Self {
        Self {
            cuil: patient.cuil.to_string(),
            name: patient.name.clone(),
            last_name: patient.last_name.clone(),
            email: patient.email.clone(),
            street: patient.address.street.clone(),
            number: patient.address.number,
            locality: patient.address.locality.clone(),
            affiliation: patient.affiliation.as_ref().map(AffiliationResponse::from),
        }
    }
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        PatientResponse::from(&patient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "Avenue Nine Of July".to_string(),
            number: 356,
            locality: "CABA".to_string(),
        }
    }

    #[test]
    fn test_patient_without_affiliation() {
        let patient = Patient::new(
            Cuil::new("20-45750673-8").unwrap(),
            "Lautaro".to_string(),
            "Lopez".to_string(),
            "lautalopez@gmail.com".to_string(),
            address(),
            None,
        );

        assert!(!patient.is_affiliated());

        let response = PatientResponse::from(&patient);
        assert_eq!(response.cuil, "20-45750673-8");
        assert_eq!(response.number, 356);
        assert!(response.affiliation.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("affiliation").is_none());
    }

    #[test]
    fn test_patient_with_affiliation() {
        let patient = Patient::new(
            Cuil::new("20-45750673-8").unwrap(),
            "Lautaro".to_string(),
            "Lopez".to_string(),
            "lautalopez@gmail.com".to_string(),
            address(),
            Some(Affiliation::new("OSDE", "123456")),
        );

        let response = PatientResponse::from(patient);
        let affiliation = response.affiliation.unwrap();
        assert_eq!(affiliation.social_work, "OSDE");
        assert_eq!(affiliation.affiliate_number, "123456");
    }

    #[test]
    fn test_create_patient_missing_fields_default() {
        let data: CreatePatient = serde_json::from_str(r#"{"name": "Lautaro"}"#).unwrap();
        assert!(data.cuil.is_none());
        assert!(data.social_work.is_none());
        assert_eq!(data.number, 0);
    }
}
