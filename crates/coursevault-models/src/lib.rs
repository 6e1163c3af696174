//! # CourseVault Models
//!
//! Domain models and DTOs for the CourseVault API.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response DTOs
//! - [`courses`]: Encrypted course rows and their decrypted views
//! - [`users`]: User entities and profile DTOs
//!
//! # Example
//!
//! ```ignore
//! use coursevault_models::auth::{LoginRequest, LoginResponse};
//! use coursevault_models::courses::{Course, CourseView};
//! use coursevault_models::users::User;
//! ```

pub mod auth;
pub mod courses;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AreaResponse, LoginRequest, LoginResponse, TOKEN_TYPE_BEARER};
pub use courses::{Course, CourseSearchParams, CourseView, NewCourse};
pub use users::{NewUser, ProfileResponse, User};
