//! Course seeding.

use coursevault_cipher::FieldCipher;
use coursevault_core::AppError;
use coursevault_db::{CourseRepository, Store};
use coursevault_models::NewCourse;

use super::models::DEMO_COURSES;

/// Encrypts and inserts the demo courses if the store has no courses.
/// Returns how many were inserted.
pub async fn seed_courses(store: &dyn Store, cipher: &FieldCipher) -> Result<usize, AppError> {
    if store.count_courses().await? > 0 {
        return Ok(0);
    }

    for demo in &DEMO_COURSES {
        store
            .insert_course(NewCourse {
                encrypted_name: cipher.encrypt(demo.name)?,
                encrypted_description: cipher.encrypt(demo.description)?,
            })
            .await?;
    }

    Ok(DEMO_COURSES.len())
}
