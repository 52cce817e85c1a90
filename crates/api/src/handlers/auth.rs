//! Login, logout, and the shared handler state.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bon::Builder;
use rupkala_config::Config;
use rupkala_const::auth::SESSION_TTL_SECONDS;
use rupkala_core::{
    AdminRepository, MediaService, OriginPolicy, TokenCodec, UserRepository, verify_password,
};
use rupkala_storage::Backend;
use rupkala_types::{
    dto::{ErrorResponse, LoginRequest, LoginResponse, MessageResponse, Profile},
    entities::SessionRole,
    error::Error,
};

use crate::session;

/// Message returned for any credential failure. Deliberately identical for
/// unknown email and wrong password so login probing learns nothing.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Shared application state for all handlers
#[derive(Clone, Builder)]
pub struct AppState {
    /// Entity store backend
    pub storage: Arc<Backend>,
    /// Server configuration
    pub config: Arc<Config>,
    /// Session token codec
    pub token_codec: Arc<TokenCodec>,
    /// Startup-derived origin allow-list and cookie domain
    pub origin_policy: Arc<OriginPolicy>,
    /// Object storage facade
    pub media: Arc<MediaService>,
}

impl AppState {
    /// Test-configured state over the given backend: fixed secret, fixed
    /// client URL, mock object storage.
    #[allow(clippy::expect_used)]
    pub fn new_test(storage: Arc<Backend>) -> Self {
        use rupkala_core::MockBlobStore;

        let config = Arc::new(
            Config::builder()
                .jwt_secret("test-secret")
                .client_url("https://rupkala.example")
                .dev_mode(true)
                .build(),
        );
        let policy = OriginPolicy::derive(&config.client_url, &[])
            .expect("test client URL derives a policy");

        AppState::builder()
            .storage(storage)
            .token_codec(Arc::new(TokenCodec::new(&config.jwt_secret)))
            .origin_policy(Arc::new(policy))
            .media(Arc::new(MediaService::new(Box::new(MockBlobStore::new()))))
            .config(config)
            .build()
    }

    pub fn user_repository(&self) -> UserRepository<Backend> {
        UserRepository::new(Arc::clone(&self.storage))
    }

    pub fn admin_repository(&self) -> AdminRepository<Backend> {
        AdminRepository::new(Arc::clone(&self.storage))
    }
}

/// API error wrapper translating domain errors into HTTP responses.
///
/// Every error renders the uniform `{"success": false, "message": ...}`
/// body with the status the domain error maps to.
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.0, code = self.0.error_code(), "request failed");
        } else {
            tracing::debug!(error = %self.0, code = self.0.error_code(), "request rejected");
        }

        (status, Json(ErrorResponse::new(self.0.to_string()))).into_response()
    }
}

/// `POST /v1/auth/login` - authenticate a storefront user.
///
/// Success responds with the profile and exactly one `Set-Cookie` carrying
/// the signed session token under the user cookie name.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let repo = state.user_repository();
    let user = repo
        .get_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::unauthenticated(BAD_CREDENTIALS))?;

    if !verify_password(&request.password, &user.password_hash) {
        return Err(Error::unauthenticated(BAD_CREDENTIALS).into());
    }

    let token = state
        .token_codec
        .sign(&user.id, chrono::Duration::seconds(SESSION_TTL_SECONDS))?;
    let cookie =
        session::issue_session(SessionRole::User, &token, state.origin_policy.cookie_domain());

    tracing::info!(user_id = %user.id, "user logged in");

    let body = LoginResponse {
        success: true,
        user: Profile::from(&user),
        message: format!("Welcome back, {}", user.name),
    };
    Ok(([(header::SET_COOKIE, cookie.to_string())], Json(body)).into_response())
}

/// `POST /v1/auth/admin/login` - authenticate an administrator.
///
/// Identical flow to user login but reads the admin record space and sets
/// the admin cookie. The two cookies never substitute for each other.
pub async fn admin_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let repo = state.admin_repository();
    let admin = repo
        .get_by_email(&request.email)
        .await?
        .ok_or_else(|| Error::unauthenticated(BAD_CREDENTIALS))?;

    if !verify_password(&request.password, &admin.password_hash) {
        return Err(Error::unauthenticated(BAD_CREDENTIALS).into());
    }

    let token = state
        .token_codec
        .sign(&admin.id, chrono::Duration::seconds(SESSION_TTL_SECONDS))?;
    let cookie =
        session::issue_session(SessionRole::Admin, &token, state.origin_policy.cookie_domain());

    tracing::info!(admin_id = %admin.id, "admin logged in");

    let body = LoginResponse {
        success: true,
        user: Profile::from(&admin),
        message: format!("Welcome back, {}", admin.name),
    };
    Ok(([(header::SET_COOKIE, cookie.to_string())], Json(body)).into_response())
}

/// `POST /v1/auth/logout` - clear the user session cookie.
///
/// Stateless: there is no token revocation, the removal cookie is the
/// entire mechanism. Succeeds whether or not a session was present.
pub async fn logout(State(state): State<AppState>) -> Result<Response, ApiError> {
    let cookie = session::clear_session(SessionRole::User, state.origin_policy.cookie_domain());

    let body = MessageResponse { success: true, message: "Logged out successfully".to_string() };
    Ok(([(header::SET_COOKIE, cookie.to_string())], Json(body)).into_response())
}
