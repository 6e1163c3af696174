//! PostgreSQL store.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, postgres::PgPoolOptions};

use coursevault_core::{AppError, Role};
use coursevault_models::{Course, NewCourse, NewUser, User};

use crate::repository::{CourseRepository, DUPLICATE_USERNAME, UserRepository};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

/// Raw `users` row; the role column is validated on conversion.
#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    hashed_password: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse()?;
        Ok(User {
            id: row.id,
            username: row.username,
            hashed_password: row.hashed_password,
            role,
        })
    }
}

impl PgStore {
    /// Opens a connection pool to `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, hashed_password, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"INSERT INTO users (username, hashed_password, role)
               VALUES ($1, $2, $3)
               RETURNING id, username, hashed_password, role"#,
        )
        .bind(&user.username)
        .bind(&user.hashed_password)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(DUPLICATE_USERNAME));
            }
            AppError::internal(e)
        })?;

        User::try_from(row)
    }

    async fn count_users(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl CourseRepository for PgStore {
    async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, encrypted_name, encrypted_description FROM courses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(courses)
    }

    async fn insert_course(&self, course: NewCourse) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses (encrypted_name, encrypted_description)
               VALUES ($1, $2)
               RETURNING id, encrypted_name, encrypted_description"#,
        )
        .bind(&course.encrypted_name)
        .bind(&course.encrypted_description)
        .fetch_one(&self.pool)
        .await?;
        Ok(course)
    }

    async fn count_courses(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
