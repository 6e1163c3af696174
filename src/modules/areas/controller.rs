use axum::Json;
use tracing::instrument;

use coursevault_models::AreaResponse;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;

/// Student-only area
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "Student content", body = AreaResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "User is not a student", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Areas"
)]
#[instrument(skip_all, fields(username = %auth_user.username()))]
pub async fn students_area(auth_user: AuthUser) -> Json<AreaResponse> {
    Json(AreaResponse {
        message: "Welcome to the Student Area".to_string(),
        data: "Exclusive Student Content".to_string(),
    })
}

/// Teacher-only area
#[utoipa::path(
    get,
    path = "/api/teachers",
    responses(
        (status = 200, description = "Teacher content", body = AreaResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "User is not a teacher", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Areas"
)]
#[instrument(skip_all, fields(username = %auth_user.username()))]
pub async fn teachers_area(auth_user: AuthUser) -> Json<AreaResponse> {
    Json(AreaResponse {
        message: "Welcome to the Teacher Area".to_string(),
        data: "Exclusive Teacher Content".to_string(),
    })
}
