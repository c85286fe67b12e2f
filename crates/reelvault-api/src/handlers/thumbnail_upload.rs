use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::image_extension;
use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use reelvault_core::models::VideoResponse;
use reelvault_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

const THUMBNAIL_FIELD: &str = "thumbnail";

/// Attach an uploaded thumbnail image to an existing record.
///
/// The image is stored on the local filesystem under a generated name and
/// the record's thumbnail reference becomes its `/assets/...` path.
#[tracing::instrument(skip(state, multipart), fields(user_id = %auth.user_id, video_id = %id, operation = "upload_thumbnail"))]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut video = state
        .videos
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != auth.user_id {
        return Err(AppError::Forbidden("User does not own the video".to_string()).into());
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart body: {}", e)))?
    {
        if field.name() != Some(THUMBNAIL_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let extension = image_extension(&content_type).ok_or_else(|| {
            AppError::InvalidInput(format!("Invalid thumbnail media type '{}'", content_type))
        })?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read thumbnail data: {}", e)))?;

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let public_path = state.assets.save(&filename, &data).await?;

        video.thumbnail_ref = Some(public_path);
        video.updated_at = Utc::now();
        state.videos.update(&video).await?;

        tracing::info!(filename = %filename, "Thumbnail attached");

        return Ok(Json(VideoResponse::from(video)));
    }

    Err(AppError::InvalidInput(format!("Missing '{}' form field", THUMBNAIL_FIELD)).into())
}
