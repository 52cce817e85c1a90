// Test fixtures are allowed to use unwrap/expect for clear failure messages
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Test fixtures and utilities for Rupkala integration tests.
//!
//! Shared helpers to eliminate duplication across integration tests. All
//! functions work with the Axum-based API and MemoryBackend storage.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rupkala_test_fixtures::{create_test_state, create_test_app, seed_user, login_user};
//!
//! # async fn my_test() {
//! let state = create_test_state();
//! let app = create_test_app(state.clone());
//!
//! seed_user(&state, "Asha", "asha@example.com", "password123").await;
//! let cookie = login_user(&app, "asha@example.com", "password123").await;
//! // Use cookie for authenticated requests: format!("rupkalaid={cookie}")
//! # }
//! ```

#![deny(unsafe_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request};
use rupkala_api::{AppState, create_router_with_state};
use rupkala_core::hash_password;
use rupkala_storage::Backend;
use rupkala_types::entities::{Admin, SessionRole, User};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Creates a test AppState with in-memory storage, a fixed signing secret,
/// and mock object storage.
pub fn create_test_state() -> AppState {
    let backend = Backend::memory();
    AppState::new_test(Arc::new(backend))
}

/// Creates a fully configured Axum router with all middleware and routes.
///
/// The returned router is ready to handle test requests via
/// `tower::ServiceExt::oneshot`.
pub fn create_test_app(state: AppState) -> axum::Router {
    create_router_with_state(state)
}

/// Seeds a user record directly into the entity store.
///
/// There is no registration endpoint in this service; test principals are
/// created through the repository, exactly as a provisioning job would.
///
/// # Panics
///
/// Panics if hashing or persistence fails.
pub async fn seed_user(state: &AppState, name: &str, email: &str, password: &str) -> User {
    let user = User::builder()
        .name(name)
        .email(email)
        .password_hash(hash_password(password).expect("password should hash"))
        .build()
        .expect("test user should be valid");

    state.user_repository().create(&user).await.expect("user should persist");
    user
}

/// Seeds an admin record directly into the entity store.
///
/// # Panics
///
/// Panics if hashing or persistence fails.
pub async fn seed_admin(state: &AppState, name: &str, email: &str, password: &str) -> Admin {
    let admin = Admin::builder()
        .name(name)
        .email(email)
        .password_hash(hash_password(password).expect("password should hash"))
        .build()
        .expect("test admin should be valid");

    state.admin_repository().create(&admin).await.expect("admin should persist");
    admin
}

/// Extracts a session cookie value from HTTP response headers.
///
/// Parses the `Set-Cookie` header for the cookie belonging to `role`
/// (`rupkalaid` for users, `rupkala-admin` for admins).
pub fn extract_session_cookie(headers: &axum::http::HeaderMap, role: SessionRole) -> Option<String> {
    let prefix = format!("{}=", role.cookie_name());
    headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(';').next().and_then(|cookie| cookie.strip_prefix(prefix.as_str())))
        .map(|s| s.to_string())
}

/// Logs in a user and returns their session cookie value.
///
/// # Panics
///
/// Panics if login fails or no session cookie is returned.
pub async fn login_user(app: &axum::Router, email: &str, password: &str) -> String {
    use axum::http::StatusCode;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "email": email,
                        "password": password
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "Login should succeed");
    extract_session_cookie(response.headers(), SessionRole::User)
        .expect("Session cookie should be set")
}

/// Logs in an admin and returns their session cookie value.
///
/// # Panics
///
/// Panics if login fails or no session cookie is returned.
pub async fn login_admin(app: &axum::Router, email: &str, password: &str) -> String {
    use axum::http::StatusCode;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/auth/admin/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "email": email,
                        "password": password
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK, "Admin login should succeed");
    extract_session_cookie(response.headers(), SessionRole::Admin)
        .expect("Admin session cookie should be set")
}

/// Parses an HTTP response body as JSON.
///
/// # Panics
///
/// Panics if the body cannot be read or parsed as valid JSON.
pub async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
