#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for the health endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rupkala_test_fixtures::{body_json, create_test_app, create_test_state};
use tower::ServiceExt;

#[tokio::test]
async fn test_livez_is_ok() {
    let app = create_test_app(create_test_state());

    let response = app
        .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_healthz_reports_storage_health() {
    let app = create_test_app(create_test_state());

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoints_need_no_session() {
    let app = create_test_app(create_test_state());

    // No cookie, no origin: both probes answer without authentication.
    for uri in ["/livez", "/healthz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "uri {uri}");
    }
}
