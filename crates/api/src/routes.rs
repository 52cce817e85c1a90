use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    handlers::{AppState, auth, health, media, users},
    middleware::{enforce_origin_policy, logging_middleware, require_admin, require_user},
};

/// Create router with state and middleware applied
///
/// Session guards wrap only their tier's routes, leaving public routes
/// (login, health) accessible without authentication. The origin filter
/// wraps everything so a disallowed origin is rejected before any guard
/// or handler runs.
pub fn create_router_with_state(state: AppState) -> axum::Router {
    // Routes that need a user session
    let user_scoped = Router::new()
        .route("/v1/users/me", get(users::me))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), require_user));

    // Routes that need an admin session
    let admin_scoped = Router::new()
        .route("/v1/admin/me", get(users::admin_me))
        .route("/v1/admin/media", post(media::upload_media).delete(media::delete_media))
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        // Health check endpoints (no authentication)
        .route("/healthz", get(health::healthz_handler))
        .route("/livez", get(health::livez_handler))
        // Authentication endpoints
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/admin/login", post(auth::admin_login))
        .route("/v1/auth/logout", post(auth::logout))
        .with_state(state.clone())
        .merge(user_scoped)
        .merge(admin_scoped)
        // Origin filter wraps every route, guards included
        .layer(middleware::from_fn_with_state(state, enforce_origin_policy))
        // Logging middleware outermost so rejected requests are logged too
        .layer(middleware::from_fn(logging_middleware))
}
