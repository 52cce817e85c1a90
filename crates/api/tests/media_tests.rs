#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for the admin-guarded media endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rupkala_test_fixtures::{body_json, create_test_app, create_test_state, login_admin, seed_admin};
use serde_json::json;
use tower::ServiceExt;

async fn admin_session(state: &rupkala_api::AppState, app: &axum::Router) -> String {
    seed_admin(state, "Root", "root@example.com", "adminpass").await;
    login_admin(app, "root@example.com", "adminpass").await
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_upload_requires_admin_session() {
    let app = create_test_app(create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/admin/media")
                .header("content-type", "image/png")
                .body(Body::from("png bytes"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Only Admin can access this route");
}

#[tokio::test]
async fn test_upload_returns_blob_reference() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    let session = admin_session(&state, &app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/admin/media")
                .header("cookie", format!("rupkala-admin={session}"))
                .header("content-type", "image/png")
                .body(Body::from("png bytes"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let id = body["media"]["id"].as_str().unwrap();
    let url = body["media"]["url"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(url.contains(id), "url {url} should reference blob id {id}");
}

#[tokio::test]
async fn test_upload_empty_body_is_rejected() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    let session = admin_session(&state, &app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/admin/media")
                .header("cookie", format!("rupkala-admin={session}"))
                .header("content-type", "image/png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("Invalid file"));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_requires_admin_session() {
    let app = create_test_app(create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/admin/media")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "ids": ["blob-1"] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_ignores_unknown_ids() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    let session = admin_session(&state, &app).await;

    // Deleting identifiers that never existed is still a success.
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/admin/media")
                .header("cookie", format!("rupkala-admin={session}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "ids": ["never-existed"] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_delete_empty_list_is_noop() {
    let state = create_test_state();
    let app = create_test_app(state.clone());
    let session = admin_session(&state, &app).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/v1/admin/media")
                .header("cookie", format!("rupkala-admin={session}"))
                .header("content-type", "application/json")
                .body(Body::from(json!({ "ids": [] }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
