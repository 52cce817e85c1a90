//! Identity echo handlers for the two credential tiers.

use axum::{Extension, Json, extract::State};
use rupkala_types::{
    dto::{MeResponse, Profile},
    entities::SessionRole,
    error::Error,
};

use crate::{handlers::auth::{ApiError, AppState}, middleware::RequestIdentity};

/// `GET /v1/users/me` - resolve and echo the authenticated user's profile.
///
/// The guard only validated the token; the record lookup happens here. A
/// session whose principal no longer exists reads as not logged in.
pub async fn me(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Result<Json<MeResponse>, ApiError> {
    let user = state
        .user_repository()
        .get(&identity.principal_id)
        .await?
        .ok_or_else(|| Error::unauthenticated(SessionRole::User.rejection_message()))?;

    Ok(Json(MeResponse { success: true, user: Profile::from(&user) }))
}

/// `GET /v1/admin/me` - admin-guarded equivalent of [`me`].
pub async fn admin_me(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Result<Json<MeResponse>, ApiError> {
    let admin = state
        .admin_repository()
        .get(&identity.principal_id)
        .await?
        .ok_or_else(|| Error::unauthenticated(SessionRole::Admin.rejection_message()))?;

    Ok(Json(MeResponse { success: true, user: Profile::from(&admin) }))
}
