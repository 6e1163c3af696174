//! Demo data seeding.
//!
//! Seeding is idempotent: users are inserted only when there are no users at
//! all, and courses only when there are no courses. Running it against a
//! populated store changes nothing.

use coursevault_cipher::FieldCipher;
use coursevault_core::AppError;
use coursevault_db::Store;

pub mod courses;
pub mod models;
pub mod users;

pub use courses::seed_courses;
pub use models::{DEMO_COURSES, DEMO_PASSWORD, DEMO_USERS, DemoCourse, DemoUser, SeedSummary};
pub use users::{create_user, seed_users};

/// Seeds the demo users and the encrypted demo courses.
///
/// `cost` is the bcrypt cost used for the demo passwords.
pub async fn seed_demo_data(
    store: &dyn Store,
    cipher: &FieldCipher,
    cost: u32,
) -> Result<SeedSummary, AppError> {
    let users_created = seed_users(store, cost).await?;
    let courses_created = seed_courses(store, cipher).await?;

    let summary = SeedSummary {
        users_created,
        courses_created,
    };
    if summary.is_empty() {
        tracing::debug!("Store already populated, nothing seeded");
    } else {
        tracing::info!(
            users = summary.users_created,
            courses = summary.courses_created,
            "Seeded demo data"
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursevault_db::{CourseRepository, MemoryStore, UserRepository};

    const TEST_COST: u32 = 4;

    fn test_cipher() -> FieldCipher {
        FieldCipher::from_key_bytes(&[3u8; coursevault_cipher::KEY_LEN]).unwrap()
    }

    #[tokio::test]
    async fn test_seed_empty_store() {
        let store = MemoryStore::new();
        let cipher = test_cipher();

        let summary = seed_demo_data(&store, &cipher, TEST_COST).await.unwrap();

        assert_eq!(summary.users_created, DEMO_USERS.len());
        assert_eq!(summary.courses_created, DEMO_COURSES.len());
        assert_eq!(store.count_users().await.unwrap(), 2);
        assert_eq!(store.count_courses().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        let cipher = test_cipher();

        seed_demo_data(&store, &cipher, TEST_COST).await.unwrap();
        let second = seed_demo_data(&store, &cipher, TEST_COST).await.unwrap();

        assert!(second.is_empty());
        assert_eq!(store.count_users().await.unwrap(), 2);
        assert_eq!(store.count_courses().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_courses_stored_encrypted_in_order() {
        let store = MemoryStore::new();
        let cipher = test_cipher();
        seed_demo_data(&store, &cipher, TEST_COST).await.unwrap();

        let courses = store.list_courses().await.unwrap();
        for (course, demo) in courses.iter().zip(DEMO_COURSES.iter()) {
            assert_ne!(course.encrypted_name, demo.name);
            assert_ne!(course.encrypted_description, demo.description);
            assert_eq!(cipher.decrypt(&course.encrypted_name).unwrap(), demo.name);
            assert_eq!(
                cipher.decrypt(&course.encrypted_description).unwrap(),
                demo.description
            );
        }
    }

    #[tokio::test]
    async fn test_users_and_courses_seeded_independently() {
        let store = MemoryStore::new();
        let cipher = test_cipher();
        create_user(&store, "someone", "secret", coursevault_core::Role::Teacher, TEST_COST)
            .await
            .unwrap();

        let summary = seed_demo_data(&store, &cipher, TEST_COST).await.unwrap();

        assert_eq!(summary.users_created, 0);
        assert_eq!(summary.courses_created, 5);
        assert!(store.find_by_username("student1").await.unwrap().is_none());
    }
}
