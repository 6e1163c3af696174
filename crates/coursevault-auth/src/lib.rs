//! # CourseVault Auth
//!
//! Access token claims and JWT utilities for the CourseVault API.
//!
//! - [`claims`]: JWT claim structure
//! - [`jwt`]: Token creation and verification
//!
//! Tokens are stateless: validity is decided by the HS256 signature and the
//! `exp` claim alone. There is no server-side token store and no revocation;
//! a token lives until it expires.
//!
//! # Example
//!
//! ```ignore
//! use coursevault_auth::{create_access_token, verify_token};
//! use coursevault_config::JwtConfig;
//! use coursevault_core::Role;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("student1", Role::Student, None, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, "student1");
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{DEFAULT_TOKEN_TTL_SECS, create_access_token, verify_token, verify_token_at};
