//! Database configuration.
//!
//! - `DATABASE_URL`: PostgreSQL connection string. Optional: when unset the
//!   server falls back to an in-memory store that is lost on restart.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)

use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            max_connections: crate::env_or("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}
