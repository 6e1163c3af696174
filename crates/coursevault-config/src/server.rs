use std::env;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: String,
    /// Insert the demo users and courses when the store is empty.
    pub seed_on_startup: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            seed_on_startup: crate::env_or("SEED_ON_STARTUP", true),
        }
    }
}
