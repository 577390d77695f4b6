//! Patient handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use common::AppResult;
use domain::{CreatePatient, PatientResponse};

use crate::extractors::AppJson;
use crate::state::AppState;

/// Create patient routes
pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_patient))
        .route("/:cuil", get(get_by_cuil))
}

/// Register a new patient
#[utoipa::path(
    post,
    path = "/patients",
    tag = "Patients",
    request_body = CreatePatient,
    responses(
        (status = 201, description = "Patient registered", body = PatientResponse),
        (status = 400, description = "Invalid CUIL or incomplete affiliation"),
        (status = 409, description = "Already registered, unknown social work or not affiliated"),
        (status = 503, description = "Affiliation registry unavailable")
    )
)]
pub async fn add_patient(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePatient>,
) -> AppResult<(StatusCode, Json<PatientResponse>)> {
    let patient = state.patient_service.add_patient(payload).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// List patients whose CUIL starts with the given value
#[utoipa::path(
    get,
    path = "/patients/{cuil}",
    tag = "Patients",
    params(("cuil" = String, Path, description = "CUIL or CUIL prefix")),
    responses(
        (status = 200, description = "Matching patients", body = Vec<PatientResponse>),
        (status = 404, description = "No patient matches")
    )
)]
pub async fn get_by_cuil(
    State(state): State<AppState>,
    Path(cuil): Path<String>,
) -> AppResult<Json<Vec<PatientResponse>>> {
    let patients = state.patient_service.get_by_cuil(&cuil).await?;
    Ok(Json(patients))
}
