use axum::Json;
use axum::extract::State;
use tracing::instrument;
use utoipa::ToSchema;

use coursevault_core::AppError;
use coursevault_models::{LoginRequest, LoginResponse, ProfileResponse};

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::{ValidatedForm, ValidatedJson};

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Login with an OAuth2 password form and receive an access token
#[utoipa::path(
    post,
    path = "/auth/token",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 400, description = "Bad request - missing field", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    ValidatedForm(dto): ValidatedForm<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Login with a JSON body and receive an access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse),
        (status = 400, description = "Bad request - missing field", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login_user(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ProfileResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all, fields(username = %auth_user.username()))]
pub async fn get_profile(auth_user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&auth_user.0))
}
