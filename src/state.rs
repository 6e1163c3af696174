use std::fmt;
use std::sync::Arc;

use coursevault_cipher::FieldCipher;
use coursevault_config::{CipherConfig, CorsConfig, DatabaseConfig, JwtConfig};
use coursevault_db::{Store, init_store};
use coursevault_observability::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub cipher: Arc<FieldCipher>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    /// `None` when metrics are disabled.
    pub metrics: Option<PrometheusHandle>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the application state from environment configuration.
///
/// # Errors
///
/// Fails if the cipher key is invalid or the database cannot be reached.
pub async fn init_app_state(metrics: Option<PrometheusHandle>) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set, using the development secret");
    }

    let cipher_config = CipherConfig::from_env();
    if cipher_config.uses_dev_key() {
        tracing::warn!("CIPHER_KEY not set, using the development key");
    }
    let cipher = FieldCipher::new(&cipher_config)?;

    let store = init_store(&DatabaseConfig::from_env())
        .await
        .map_err(|e| e.error)?;

    Ok(AppState {
        store,
        cipher: Arc::new(cipher),
        jwt_config,
        cors_config: CorsConfig::from_env(),
        metrics,
    })
}
