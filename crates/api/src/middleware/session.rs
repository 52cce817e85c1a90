//! Session guards for the two credential tiers.
//!
//! Each guard reads exactly one cookie. A token presented under the wrong
//! cookie name is never read by the other tier's guard, so the cookie
//! names are the entire role boundary. Token failures collapse into the
//! same 401 as a missing cookie; the response never distinguishes
//! missing, malformed, and expired.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use rupkala_types::{entities::SessionRole, error::Error};

use crate::handlers::auth::{ApiError, AppState};

/// Identity attached to the request after a guard admits it.
///
/// Carries only what the token proved. Record resolution is the
/// handler's job.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    /// Principal id from the token's subject claim
    pub principal_id: String,
    /// Which guard admitted the request
    pub role: SessionRole,
}

async fn guard_session(
    state: AppState,
    mut request: Request,
    next: Next,
    role: SessionRole,
) -> Result<Response, ApiError> {
    let jar = CookieJar::from_headers(request.headers());
    let token = jar
        .get(role.cookie_name())
        .map(|c| c.value().to_string())
        .ok_or_else(|| Error::unauthenticated(role.rejection_message()))?;

    let claims = state.token_codec.verify(&token).map_err(|e| {
        tracing::debug!(error = %e, ?role, "session token rejected");
        Error::unauthenticated(role.rejection_message())
    })?;

    request.extensions_mut().insert(RequestIdentity { principal_id: claims.sub, role });

    Ok(next.run(request).await)
}

/// Guard middleware for user-tier routes.
pub async fn require_user(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard_session(state, request, next, SessionRole::User).await
}

/// Guard middleware for admin-tier routes.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    guard_session(state, request, next, SessionRole::Admin).await
}
