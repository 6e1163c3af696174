use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

use crate::is_observability_enabled;

/// `path` label for requests that matched no route.
pub const UNMATCHED_PATH_LABEL: &str = "unmatched";

/// Initialize the Prometheus recorder with an upkeep task.
///
/// Returns `None` if observability is disabled. Must be called from within
/// a Tokio runtime.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5,
                10.0,
            ],
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Route template for the `path` label. Raw URIs are never used so the
/// number of series stays bounded.
pub fn path_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH_LABEL.to_owned())
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = path_label(&req);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Counts a login attempt; `outcome` is `"success"` or a failure reason.
pub fn track_login_attempt(outcome: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("auth_login_attempts_total", "outcome" => outcome).increment(1);
}

pub fn track_token_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("auth_tokens_issued_total").increment(1);
}

/// Counts a rejected request; `reason` is `"unauthenticated"` or `"forbidden"`.
pub fn track_access_denied(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("auth_access_denied_total", "reason" => reason).increment(1);
}

pub fn track_decryption_failure() {
    if !is_observability_enabled() {
        return;
    }
    counter!("cipher_decryption_failures_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware::from_fn, routing::get};
    use tower::ServiceExt;

    async fn echo_label(req: Request, next: Next) -> Response {
        let label = path_label(&req);
        let mut response = next.run(req).await;
        response
            .headers_mut()
            .insert("x-path-label", label.parse().unwrap());
        response
    }

    #[test]
    fn test_unrouted_request_uses_fixed_label() {
        for path in ["/scan-1", "/scan-2", "/wp-admin/setup.php"] {
            let req = axum::http::Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap();
            assert_eq!(path_label(&req), UNMATCHED_PATH_LABEL);
        }
    }

    #[tokio::test]
    async fn test_routed_request_uses_route_template() {
        let app = Router::new()
            .route("/courses/{id}", get(|| async { "ok" }))
            .layer(from_fn(echo_label));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/courses/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-path-label"], "/courses/{id}");
    }
}
