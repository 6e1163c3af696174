#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use coursevault::router::init_router;
use coursevault::state::AppState;
use coursevault_cipher::{FieldCipher, KEY_LEN};
use coursevault_cli::seeder::seed_demo_data;
use coursevault_config::{CorsConfig, JwtConfig};
use coursevault_db::MemoryStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Lowest bcrypt cost, to keep the suite fast.
pub const TEST_COST: u32 = 4;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 1800,
    }
}

pub fn test_cipher() -> FieldCipher {
    FieldCipher::from_key_bytes(&[42u8; KEY_LEN]).unwrap()
}

/// State over a fresh in-memory store holding the demo data.
pub async fn seeded_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    let cipher = test_cipher();
    seed_demo_data(store.as_ref(), &cipher, TEST_COST)
        .await
        .unwrap();

    AppState {
        store,
        cipher: Arc::new(cipher),
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        metrics: None,
    }
}

pub async fn setup_test_app() -> Router {
    init_router(seeded_state().await)
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn login_json(app: &Router, username: &str, password: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "username": username, "password": password }).to_string(),
        ))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Logs in through the JSON endpoint and returns the access token.
pub async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let response = login_json(app, username, password).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["access_token"].as_str().unwrap().to_string()
}
