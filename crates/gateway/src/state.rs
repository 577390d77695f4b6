//! Application state for dependency injection.

use std::sync::Arc;

use auth_service_lib::AuthService;
use patient_service_lib::PatientService;

use crate::infra::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub patient_service: Arc<dyn PatientService>,
    /// Checked by the health endpoint; `None` when running without storage
    pub database: Option<Database>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        patient_service: Arc<dyn PatientService>,
        database: Option<Database>,
    ) -> Self {
        Self {
            auth_service,
            patient_service,
            database,
        }
    }
}
