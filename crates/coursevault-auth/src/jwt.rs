//! JWT (JSON Web Token) utilities for authentication.
//!
//! Access tokens are HS256-signed with the process-wide secret from
//! [`JwtConfig`] and carry the username, role and an absolute expiry.
//!
//! A token is valid strictly before its `exp` timestamp; at `exp` and after it
//! is rejected. No clock leeway is applied.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use coursevault_config::JwtConfig;
use coursevault_core::{AppError, Role};

use crate::claims::Claims;

/// Lifetime of a token when the caller does not specify one (15 minutes).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Creates a signed access token for `subject` with the given `role`.
///
/// # Arguments
///
/// * `subject` - The username the token identifies
/// * `role` - The user's role, embedded as a claim
/// * `ttl` - Token lifetime; [`DEFAULT_TOKEN_TTL_SECS`] when `None`
/// * `jwt_config` - Configuration holding the signing secret
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(
    subject: &str,
    role: Role,
    ttl: Option<Duration>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let ttl = ttl.unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_TTL_SECS));
    let exp = now.saturating_add(ttl.num_seconds()).max(0);

    let claims = Claims {
        sub: subject.to_string(),
        role,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token against the current time.
///
/// # Errors
///
/// Returns an unauthorized error if:
/// - The token is malformed or its claims do not parse
/// - The signature does not verify with the configured secret
/// - The token has expired
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    verify_token_at(token, jwt_config, Utc::now().timestamp().max(0) as usize)
}

/// Verifies an access token as of the Unix timestamp `now`.
pub fn verify_token_at(token: &str, jwt_config: &JwtConfig, now: usize) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is checked below so the boundary is exact.
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))?;

    if now >= claims.exp {
        return Err(AppError::unauthorized("Invalid or expired token".to_string()));
    }

    Ok(claims)
}
