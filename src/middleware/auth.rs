use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use coursevault_auth::verify_token;
use coursevault_core::AppError;
use coursevault_db::UserRepository;
use coursevault_models::User;
use coursevault_observability::track_access_denied;

use crate::state::AppState;

/// Returned when no bearer token is presented.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Returned for any token that does not resolve to a user.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

fn credentials_error() -> AppError {
    AppError::unauthorized(INVALID_CREDENTIALS.to_string())
}

/// Extractor that validates the bearer token and resolves the caller.
///
/// The role is read from the stored user, not from the token, so a role
/// change takes effect on the next request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

/// Resolves a raw bearer token to the user it names.
///
/// A bad token and a token for a user that no longer exists fail
/// identically.
pub async fn authenticate(state: &AppState, token: &str) -> Result<User, AppError> {
    let claims = verify_token(token, &state.jwt_config).map_err(|_| credentials_error())?;

    state
        .store
        .find_by_username(&claims.sub)
        .await?
        .ok_or_else(credentials_error)
}

/// Reads the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .map(|(scheme, token)| (scheme, token.trim()))
        .filter(|(scheme, token)| scheme.eq_ignore_ascii_case("bearer") && !token.is_empty())
        .map(|(_, token)| token)
        .ok_or_else(|| AppError::unauthorized(NOT_AUTHENTICATED.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already resolved by a role gate on this route
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let result = match bearer_token(parts) {
            Ok(token) => authenticate(state, token).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(user) => Ok(AuthUser(user)),
            Err(err) => {
                if err.is_unauthorized() {
                    track_access_denied("unauthenticated");
                    tracing::debug!(error = %err.error, "Rejected unauthenticated request");
                }
                Err(err)
            }
        }
    }
}
