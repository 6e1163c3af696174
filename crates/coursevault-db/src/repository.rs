//! Repository traits.

use async_trait::async_trait;

use coursevault_core::AppError;
use coursevault_models::{Course, NewCourse, NewUser, User};

/// Message of the error returned when inserting a taken username.
pub const DUPLICATE_USERNAME: &str = "Username already exists";

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts a user and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a bad request error if the username is already taken.
    async fn insert_user(&self, user: NewUser) -> Result<User, AppError>;

    async fn count_users(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Lists every course in ascending id order, which is insertion order.
    async fn list_courses(&self) -> Result<Vec<Course>, AppError>;

    async fn insert_course(&self, course: NewCourse) -> Result<Course, AppError>;

    async fn count_courses(&self) -> Result<i64, AppError>;
}

/// Everything the application needs from persistence.
pub trait Store: UserRepository + CourseRepository {}

impl<T> Store for T where T: UserRepository + CourseRepository {}
