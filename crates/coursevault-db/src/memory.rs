//! In-process store.
//!
//! Ids are assigned sequentially from 1, so listing order equals insertion
//! order, matching the PostgreSQL store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use coursevault_core::AppError;
use coursevault_models::{Course, NewCourse, NewUser, User};

use crate::repository::{CourseRepository, DUPLICATE_USERNAME, UserRepository};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    courses: Vec<Course>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::bad_request(anyhow::anyhow!(DUPLICATE_USERNAME)));
        }

        let user = User {
            id: tables.users.len() as i64 + 1,
            username: user.username,
            hashed_password: user.hashed_password,
            role: user.role,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.users.len() as i64)
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.tables.read().await.courses.clone())
    }

    async fn insert_course(&self, course: NewCourse) -> Result<Course, AppError> {
        let mut tables = self.tables.write().await;
        let course = Course {
            id: tables.courses.len() as i64 + 1,
            encrypted_name: course.encrypted_name,
            encrypted_description: course.encrypted_description,
        };
        tables.courses.push(course.clone());
        Ok(course)
    }

    async fn count_courses(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.courses.len() as i64)
    }
}
