//! CourseVault Observability
//!
//! - Structured logging via `tracing`, to the console and to daily-rolling
//!   files
//! - Per-request logging middleware
//! - Prometheus metrics: HTTP traffic plus authentication and cipher events
//!
//! Observability is controlled at runtime by the `OBSERVABILITY_ENABLED`
//! environment variable (enabled unless set to `false` or `0`). When disabled,
//! logging falls back to the console only and metrics are not recorded.
//!
//! # Examples
//!
//! ```no_run
//! use coursevault_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing()?;
//!     let metrics_handle = init_metrics()?;
//!     // ... application code ...
//!     Ok(())
//! }
//! ```

use std::sync::OnceLock;

pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};
pub use metrics::{
    init_metrics, metrics_middleware, track_access_denied, track_decryption_failure,
    track_login_attempt, track_token_issued,
};
pub use metrics_exporter_prometheus::PrometheusHandle;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via the `OBSERVABILITY_ENABLED` env var.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED
        .get_or_init(|| parse_enabled(std::env::var("OBSERVABILITY_ENABLED").ok().as_deref()))
}

fn parse_enabled(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.eq_ignore_ascii_case("false") && v != "0",
        None => true, // Enabled by default
    }
}
