// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use social_feed::config::Config;
use social_feed::db::{FirestoreDb, MemoryDb};
use social_feed::middleware::auth::create_jwt;
use social_feed::models::{BackendTimestamp, Post};
use social_feed::routes::create_router;
use social_feed::AppState;
use std::sync::Arc;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over an in-memory store.
/// Returns the router, the shared state and a handle on the store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, MemoryDb) {
    create_test_app_with_config(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with_frontend_url(frontend_url: &str) -> (axum::Router, Arc<AppState>, MemoryDb) {
    let mut config = Config::test_default();
    config.frontend_url = frontend_url.to_string();
    create_test_app_with_config(config)
}

fn create_test_app_with_config(config: Config) -> (axum::Router, Arc<AppState>, MemoryDb) {
    let db = MemoryDb::new();
    let state = Arc::new(AppState::new(config, Arc::new(db.clone())));
    (create_router(state.clone()), state, db)
}

/// Create a session token for a viewer.
#[allow(dead_code)]
pub fn create_test_jwt(user_id: &str, signing_key: &[u8]) -> String {
    create_jwt(user_id, signing_key).expect("Failed to create test JWT")
}

/// A post fixture at a fixed time.
#[allow(dead_code)]
pub fn test_post(id: &str, author: &str) -> Post {
    Post {
        id: id.to_string(),
        author: author.to_string(),
        content: format!("Content of {}", id),
        timestamp: BackendTimestamp::Seconds {
            seconds: 1640995200,
        },
    }
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
