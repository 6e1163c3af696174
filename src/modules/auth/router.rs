use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_profile, login_for_access_token, login_user};
use crate::state::AppState;

/// Routes nested under `/api/auth`.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/me", get(get_profile))
}

/// The OAuth2 token endpoint, mounted at `/auth/token`.
pub fn init_token_router() -> Router<AppState> {
    Router::new().route("/token", post(login_for_access_token))
}
