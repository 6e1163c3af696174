//! Middleware and extractors for the access control gate.
//!
//! - [`auth`]: bearer token extraction and caller resolution ([`auth::AuthUser`])
//! - [`role`]: role checks and the per-route role gates
//!
//! # Request Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The token is verified and its subject looked up; failure is a 401
//! 3. On role-gated routes the user's role is compared with the required
//!    one; mismatch is a 403
//! 4. Handler executes
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::role::require_teacher;
//!
//! let router = Router::new()
//!     .route("/", get(teachers_area))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher));
//! ```

pub mod auth;
pub mod role;
