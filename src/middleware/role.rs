use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use coursevault_core::{AppError, Role};
use coursevault_models::User;
use coursevault_observability::track_access_denied;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Fails with 403 unless `user` holds `required`.
pub fn check_role(user: &User, required: Role) -> Result<(), AppError> {
    if user.role == required {
        Ok(())
    } else {
        Err(AppError::forbidden(format!(
            "Access forbidden: User is not a {}",
            required
        )))
    }
}

/// Middleware gating a route on `role`.
///
/// On success the resolved [`AuthUser`] is stored in the request extensions
/// so handlers can extract it without a second lookup.
pub async fn require_role(
    state: AppState,
    request: Request,
    next: Next,
    role: Role,
) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if let Err(err) = check_role(&auth_user.0, role) {
        track_access_denied("forbidden");
        tracing::warn!(
            username = %auth_user.username(),
            role = %auth_user.0.role,
            required = %role,
            "Role check failed"
        );
        return Err(err);
    }

    parts.extensions.insert(auth_user);
    let request = Request::from_parts(parts, body);

    Ok(next.run(request).await)
}

pub async fn require_student(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match require_role(state, request, next, Role::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_teacher(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match require_role(state, request, next, Role::Teacher).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
