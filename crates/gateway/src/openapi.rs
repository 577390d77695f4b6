//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::LoginRequest;
use domain::{AffiliationResponse, CreatePatient, PatientResponse, RegisterUser, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::patient_handler::add_patient,
        crate::handlers::patient_handler::get_by_cuil,
    ),
    components(
        schemas(
            LoginRequest,
            RegisterUser,
            UserResponse,
            CreatePatient,
            PatientResponse,
            AffiliationResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Staff login and registration"),
        (name = "Patients", description = "Patient intake and lookup"),
    )
)]
pub struct ApiDoc;
