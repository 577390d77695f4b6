//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::{RegisterUser, UserResponse};

use crate::extractors::AppJson;
use crate::state::AppState;

/// Returned when the account could not be stored
const NOT_REGISTERED_MESSAGE: &str = "The user could not be registered.";

/// User login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login email address
    #[serde(default)]
    #[schema(example = "ramirobrito@gmail.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "bocateamo")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new employee account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Missing field, password mismatch or invalid CUIL"),
        (status = 409, description = "User could not be registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .auth_service
        .register(payload)
        .await?
        .ok_or_else(|| AppError::conflict(NOT_REGISTERED_MESSAGE))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 400, description = "Email or password missing"),
        (status = 404, description = "Incorrect user or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(user))
}
