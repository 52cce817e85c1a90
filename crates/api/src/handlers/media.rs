//! Admin-guarded media upload and deletion.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use bytes::Bytes;
use rupkala_types::dto::{DeleteMediaRequest, MediaUploadResponse, MessageResponse};

use crate::handlers::auth::{ApiError, AppState};

/// `POST /v1/admin/media` - upload a media file.
///
/// The raw request body is the file; the `Content-Type` header is the
/// mime type. Provider failures surface as 502, never as success.
pub async fn upload_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MediaUploadResponse>, ApiError> {
    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let blob = state.media.upload(body, mime).await?;

    Ok(Json(MediaUploadResponse {
        success: true,
        media: blob,
        message: "Media uploaded successfully".to_string(),
    }))
}

/// `DELETE /v1/admin/media` - batch-delete media blobs by identifier.
pub async fn delete_media(
    State(state): State<AppState>,
    Json(request): Json<DeleteMediaRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.media.delete(&request.ids).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Media deleted successfully".to_string(),
    }))
}
