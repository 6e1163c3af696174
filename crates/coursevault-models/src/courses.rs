//! Course models.
//!
//! Courses are persisted only in encrypted form ([`Course`]); the plaintext
//! [`CourseView`] exists transiently while a request is being served.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A stored course. Both text fields are ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: i64,
    pub encrypted_name: String,
    pub encrypted_description: String,
}

/// A course about to be inserted, already encrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub encrypted_name: String,
    pub encrypted_description: String,
}

/// A decrypted course as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CourseView {
    pub id: i64,
    #[schema(example = "Segurança da Informação")]
    pub name: String,
    #[schema(example = "Criptografia, hashes e segurança.")]
    pub description: String,
}

/// Query parameters of the course search.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CourseSearchParams {
    /// Case-insensitive substring matched against name and description
    pub search: Option<String>,
}
