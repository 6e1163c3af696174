//! User entities.
//!
//! The bcrypt digest travels with [`User`] so the login flow can verify it,
//! but it is never serialized and is redacted from `Debug` output. API
//! responses use [`ProfileResponse`].

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use coursevault_core::Role;

/// A user as stored by the persistence layer.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("hashed_password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// A user about to be inserted. The password must already be hashed.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("hashed_password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Public view of the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}
