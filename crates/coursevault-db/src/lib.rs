//! # CourseVault DB
//!
//! Persistence layer for the CourseVault API.
//!
//! Handlers never talk to a database directly; they go through the
//! [`UserRepository`] and [`CourseRepository`] traits, bundled as [`Store`].
//! Two implementations are provided:
//!
//! - [`PgStore`]: PostgreSQL via SQLx, with embedded migrations
//! - [`MemoryStore`]: in-process storage, used when no `DATABASE_URL` is
//!   configured and by the test suites
//!
//! # Example
//!
//! ```ignore
//! use coursevault_config::DatabaseConfig;
//! use coursevault_db::init_store;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), coursevault_core::AppError> {
//!     let store = init_store(&DatabaseConfig::from_env()).await?;
//!     let courses = store.list_courses().await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use coursevault_config::DatabaseConfig;
use coursevault_core::AppError;

pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::{CourseRepository, Store, UserRepository};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Builds the store selected by configuration.
///
/// With `DATABASE_URL` set this connects to PostgreSQL and runs pending
/// migrations. Without it an empty [`MemoryStore`] is returned.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_store(config: &DatabaseConfig) -> Result<Arc<dyn Store>, AppError> {
    match &config.url {
        Some(url) => {
            let store = PgStore::connect(url, config.max_connections).await?;
            store.migrate().await?;
            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on restart)");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_store_without_url_is_memory() {
        let config = DatabaseConfig {
            url: None,
            max_connections: 5,
        };
        let store = init_store(&config).await.unwrap();
        assert_eq!(store.count_users().await.unwrap(), 0);
        assert_eq!(store.count_courses().await.unwrap(), 0);
    }
}
