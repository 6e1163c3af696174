//! Authentication DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use coursevault_core::Role;

/// Value of `token_type` in every [`LoginResponse`].
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Login request with username and password.
///
/// Accepted both as JSON and as an OAuth2 password form. The password is
/// redacted from `Debug` output.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "student1")]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pass123")]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    /// Always `"bearer"`
    #[schema(example = "bearer")]
    pub token_type: String,
    pub role: Role,
    pub username: String,
}

/// Payload of the role-restricted areas.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaResponse {
    pub message: String,
    pub data: String,
}
