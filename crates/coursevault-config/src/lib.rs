//! # CourseVault Config
//!
//! Configuration types for the CourseVault API, loaded from environment
//! variables (a `.env` file is read by the binaries with `dotenvy`):
//!
//! - [`jwt`]: Token signing secret and access token lifetime
//! - [`cipher`]: Field encryption key
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Optional PostgreSQL connection settings
//! - [`server`]: Bind address and startup behaviour
//!
//! # Example
//!
//! ```ignore
//! use coursevault_config::{CipherConfig, CorsConfig, JwtConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cipher_config = CipherConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cipher;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cipher::CipherConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads an environment variable and parses it, falling back to `default`
/// when the variable is unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
