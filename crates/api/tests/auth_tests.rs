#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for the login and logout flows.
//!
//! These exercise the full middleware stack via `tower::ServiceExt::oneshot`:
//! credential verification, session token issuance, and the fixed cookie
//! attribute set.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rupkala_test_fixtures::{
    body_json, create_test_app, create_test_state, login_user, seed_admin, seed_user,
};
use serde_json::json;
use tower::ServiceExt;

fn login_request(uri: &str, email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json!({ "email": email, "password": password }).to_string()))
        .unwrap()
}

// ---------------------------------------------------------------------------
// User login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_success_returns_profile_and_cookie() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    seed_user(&state, "Asha", "asha@example.com", "password123").await;

    let response = app
        .clone()
        .oneshot(login_request("/v1/auth/login", "asha@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookies: Vec<_> = response.headers().get_all("set-cookie").iter().collect();
    assert_eq!(set_cookies.len(), 1, "login must set exactly one cookie");

    let cookie = set_cookies[0].to_str().unwrap();
    assert!(cookie.starts_with("rupkalaid="), "cookie: {cookie}");
    assert!(cookie.contains("Max-Age=86400"), "cookie: {cookie}");
    assert!(cookie.contains("SameSite=None"), "cookie: {cookie}");
    assert!(cookie.contains("HttpOnly"), "cookie: {cookie}");
    assert!(cookie.contains("Secure"), "cookie: {cookie}");
    assert!(cookie.contains("Path=/"), "cookie: {cookie}");
    assert!(cookie.contains("Domain=.rupkala.example"), "cookie: {cookie}");

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "asha@example.com");
    assert_eq!(body["user"]["name"], "Asha");
    assert!(body["user"].get("password_hash").is_none());
    assert_eq!(body["message"], "Welcome back, Asha");
}

#[tokio::test]
async fn test_login_wrong_password_is_uniform_401() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    seed_user(&state, "Asha", "asha@example.com", "password123").await;

    let wrong_password = app
        .clone()
        .oneshot(login_request("/v1/auth/login", "asha@example.com", "nope"))
        .await
        .unwrap();
    let unknown_email = app
        .clone()
        .oneshot(login_request("/v1/auth/login", "nobody@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: probing must not distinguish unknown email from
    // wrong password.
    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a["success"], false);
    assert_eq!(a["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_failed_login_sets_no_cookie() {
    let state = create_test_state();
    let app = create_test_app(state);

    let response = app
        .oneshot(login_request("/v1/auth/login", "nobody@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get("set-cookie").is_none());
}

// ---------------------------------------------------------------------------
// Admin login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_admin_login_sets_admin_cookie() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    seed_admin(&state, "Root", "root@example.com", "adminpass").await;

    let response = app
        .oneshot(login_request("/v1/auth/admin/login", "root@example.com", "adminpass"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("rupkala-admin="), "cookie: {cookie}");
    assert!(!cookie.starts_with("rupkalaid="));
}

#[tokio::test]
async fn test_user_credentials_do_not_work_on_admin_login() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    seed_user(&state, "Asha", "asha@example.com", "password123").await;

    // A user record is invisible to the admin login flow.
    let response = app
        .oneshot(login_request("/v1/auth/admin/login", "asha@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_logout_sends_removal_cookie() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    seed_user(&state, "Asha", "asha@example.com", "password123").await;
    let session = login_user(&app, "asha@example.com", "password123").await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/auth/logout")
                .header("cookie", format!("rupkalaid={session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("rupkalaid="), "cookie: {cookie}");
    assert!(cookie.contains("Max-Age=0"), "cookie: {cookie}");
    // Removal keeps the issuance scoping so the browser matches the cookie.
    assert!(cookie.contains("Path=/"), "cookie: {cookie}");
    assert!(cookie.contains("Domain=.rupkala.example"), "cookie: {cookie}");

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let state = create_test_state();
    let app = create_test_app(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
