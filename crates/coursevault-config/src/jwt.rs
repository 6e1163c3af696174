use std::env;
use std::fmt;

/// Fallback signing secret for local development.
pub const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of tokens issued at login, in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            access_token_expiry: crate::env_or("JWT_ACCESS_EXPIRY", 1800), // 30 minutes
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_JWT_SECRET
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}
