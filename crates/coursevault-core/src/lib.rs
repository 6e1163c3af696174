//! # CourseVault Core
//!
//! Core types, errors, and utilities for the CourseVault API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`roles`]: The closed set of user roles
//!
//! # Example
//!
//! ```ignore
//! use coursevault_core::{AppError, Role, hash_password, verify_password};
//!
//! let digest = hash_password("pass123")?;
//! assert!(verify_password("pass123", &digest));
//!
//! let role: Role = "teacher".parse()?;
//! ```

pub mod errors;
pub mod password;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{
    DEFAULT_HASH_COST, MAX_PASSWORD_BYTES, hash_password, hash_password_with_cost, verify_password,
    verify_password_dummy,
};
pub use roles::{Role, UnknownRole};
