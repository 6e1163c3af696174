use chrono::Duration;
use tracing::instrument;

use coursevault_auth::create_access_token;
use coursevault_config::JwtConfig;
use coursevault_core::{AppError, verify_password, verify_password_dummy};
use coursevault_db::{Store, UserRepository};
use coursevault_models::{LoginRequest, LoginResponse, TOKEN_TYPE_BEARER};
use coursevault_observability::{track_login_attempt, track_token_issued};

/// Returned for both an unknown username and a wrong password.
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login_user(
        store: &dyn Store,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = store.find_by_username(&dto.username).await?;

        let verified = match &user {
            Some(u) => verify_password(&dto.password, &u.hashed_password),
            None => verify_password_dummy(&dto.password),
        };

        let Some(user) = user.filter(|_| verified) else {
            track_login_attempt("invalid_credentials");
            tracing::info!("Login failed");
            return Err(AppError::unauthorized(INCORRECT_CREDENTIALS.to_string()));
        };

        let ttl = Duration::try_seconds(jwt_config.access_token_expiry).ok_or_else(|| {
            AppError::internal_error(format!(
                "Token lifetime out of range: {}s",
                jwt_config.access_token_expiry
            ))
        })?;

        let access_token = create_access_token(&user.username, user.role, Some(ttl), jwt_config)?;

        track_login_attempt("success");
        track_token_issued();
        tracing::info!(role = %user.role, "Login succeeded");

        Ok(LoginResponse {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            role: user.role,
            username: user.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use coursevault_cli::seeder::create_user;
    use coursevault_core::Role;
    use coursevault_db::MemoryStore;

    fn jwt_config(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret: "service-test-secret-at-least-32-chars".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    async fn store_with_student() -> MemoryStore {
        let store = MemoryStore::new();
        create_user(&store, "student1", "pass123", Role::Student, 4)
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_login_issues_bearer_token() {
        let store = store_with_student().await;

        let response = AuthService::login_user(&store, login("student1", "pass123"), &jwt_config(1800))
            .await
            .unwrap();

        assert_eq!(response.token_type, TOKEN_TYPE_BEARER);
        assert_eq!(response.role, Role::Student);
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_expiry_is_an_error_not_a_panic() {
        let store = store_with_student().await;

        for expiry in [i64::MAX, i64::MIN] {
            let err =
                AuthService::login_user(&store, login("student1", "pass123"), &jwt_config(expiry))
                    .await
                    .unwrap_err();
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_get_same_error() {
        let store = store_with_student().await;
        let config = jwt_config(1800);

        let unknown = AuthService::login_user(&store, login("nobody", "pass123"), &config)
            .await
            .unwrap_err();
        let wrong = AuthService::login_user(&store, login("student1", "nope"), &config)
            .await
            .unwrap_err();

        assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.error.to_string(), INCORRECT_CREDENTIALS);
        assert_eq!(wrong.error.to_string(), INCORRECT_CREDENTIALS);
    }
}
