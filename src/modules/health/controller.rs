use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use coursevault_core::AppError;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Prometheus metrics in text exposition format
pub async fn render_metrics(State(state): State<AppState>) -> Result<String, AppError> {
    match &state.metrics {
        Some(handle) => Ok(handle.render()),
        None => Err(AppError::not_found(anyhow::anyhow!("Metrics are disabled"))),
    }
}
