//! Cross-origin request filter.
//!
//! Sits outermost on the router (before the guards) and enforces the
//! startup-derived allow-list. A disallowed origin is rejected with 403
//! rather than merely losing its CORS headers, so the failure is visible
//! to clients and logs alike. Admitted browser requests get the origin
//! echoed back with credentials allowed, which is what lets the
//! cross-site session cookie flow at all.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use rupkala_types::error::Error;

use crate::handlers::auth::{ApiError, AppState};

/// Origin filter middleware.
pub async fn enforce_origin_policy(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let origin = match request.headers().get(header::ORIGIN) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(origin) => Some(origin.to_string()),
            // An Origin header that is not valid ASCII matches nothing.
            Err(_) => {
                tracing::warn!("rejected request with malformed Origin header");
                return Err(Error::cors_rejected("<malformed origin>").into());
            },
        },
    };

    if !state.origin_policy.is_allowed(origin.as_deref()) {
        let origin = origin.unwrap_or_default();
        tracing::warn!(origin, "rejected cross-origin request");
        return Err(Error::cors_rejected(origin).into());
    }

    // Preflight requests are answered here; they never reach the guards,
    // because browsers send them without credentials.
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), origin.as_deref());
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE"),
        );
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        );
        return Ok(response);
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut(), origin.as_deref());
    Ok(response)
}

/// Echo the admitted origin with credentials allowed.
///
/// Requests without an Origin header (same-origin, curl) get no CORS
/// headers; the browser model does not apply to them.
fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&str>) {
    let Some(origin) = origin else { return };
    let Ok(value) = HeaderValue::from_str(origin) else { return };

    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
}
