//! Health check endpoints.
//!
//! Unauthenticated and exempt from the origin filter's credential echo
//! (they still pass through it, but carry no cookies).

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::handlers::auth::AppState;

/// `GET /livez` - liveness probe. Succeeds whenever the process can
/// answer HTTP at all.
pub async fn livez_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /healthz` - readiness probe. Verifies the entity store is
/// reachable.
pub async fn healthz_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    use rupkala_storage::StorageBackend;

    match state.storage.health_check().await {
        Ok(()) => Ok(Json(json!({ "status": "ok" }))),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            ))
        },
    }
}
