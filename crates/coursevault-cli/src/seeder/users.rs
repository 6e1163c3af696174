//! User seeding and provisioning.

use coursevault_core::{AppError, Role, hash_password_with_cost};
use coursevault_db::{Store, UserRepository};
use coursevault_models::{NewUser, User};

use super::models::{DEMO_PASSWORD, DEMO_USERS};

/// Inserts the demo users if the store has no users. Returns how many were
/// inserted.
pub async fn seed_users(store: &dyn Store, cost: u32) -> Result<usize, AppError> {
    if store.count_users().await? > 0 {
        return Ok(0);
    }

    // Every demo account shares one password, so hash it once.
    let hashed_password = hash_password_with_cost(DEMO_PASSWORD, cost)?;
    for demo in &DEMO_USERS {
        store
            .insert_user(NewUser {
                username: demo.username.to_string(),
                hashed_password: hashed_password.clone(),
                role: demo.role,
            })
            .await?;
    }

    Ok(DEMO_USERS.len())
}

/// Provisions a single user account.
///
/// # Errors
///
/// Returns a bad request error if the username is empty or already taken.
pub async fn create_user(
    store: &dyn Store,
    username: &str,
    password: &str,
    role: Role,
    cost: u32,
) -> Result<User, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::bad_request(anyhow::anyhow!("Username must not be empty")));
    }

    let hashed_password = hash_password_with_cost(password, cost)?;
    let user = store
        .insert_user(NewUser {
            username: username.to_string(),
            hashed_password,
            role,
        })
        .await?;

    tracing::info!(username = %user.username, role = %user.role, "Created user");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursevault_core::verify_password;
    use coursevault_db::MemoryStore;

    #[tokio::test]
    async fn test_demo_users_verify_with_demo_password() {
        let store = MemoryStore::new();
        seed_users(&store, 4).await.unwrap();

        for demo in &DEMO_USERS {
            let user = store.find_by_username(demo.username).await.unwrap().unwrap();
            assert_eq!(user.role, demo.role);
            assert!(verify_password(DEMO_PASSWORD, &user.hashed_password));
        }
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate() {
        let store = MemoryStore::new();
        create_user(&store, "alice", "pw", Role::Student, 4)
            .await
            .unwrap();

        let err = create_user(&store, "alice", "pw", Role::Teacher, 4)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
    }

    #[tokio::test]
    async fn test_create_user_rejects_blank_username() {
        let store = MemoryStore::new();
        let err = create_user(&store, "   ", "pw", Role::Student, 4)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 400);
    }
}
