use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use futures::stream;
use reelvault_core::models::VideoResponse;
use reelvault_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

const VIDEO_FIELD: &str = "video";

/// Attach an uploaded video to an existing record.
///
/// Expects a multipart body with a field literally named `video` of
/// declared type `video/mp4`. The field stream is handed to the ingestion
/// pipeline without being collected in memory.
#[tracing::instrument(skip(state, multipart), fields(user_id = %auth.user_id, video_id = %id, operation = "upload_video"))]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart body: {}", e)))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();

        let body = stream::try_unfold(field, |mut field| async move {
            match field.chunk().await {
                Ok(Some(bytes)) => Ok(Some((bytes, field))),
                Ok(None) => Ok(None),
                Err(e) => Err(AppError::InvalidInput(format!(
                    "Failed to read upload stream: {}",
                    e
                ))),
            }
        });

        let video = state
            .ingestor
            .ingest(auth.user_id, id, &content_type, body)
            .await?;

        return Ok(Json(VideoResponse::from(video)));
    }

    Err(AppError::InvalidInput(format!("Missing '{}' form field", VIDEO_FIELD)).into())
}
