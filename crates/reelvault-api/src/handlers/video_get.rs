use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::services::with_signed_video_url;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use reelvault_core::models::VideoResponse;
use reelvault_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Fetch one record. The stored compound reference is exchanged for a
/// fresh signed URL on every read.
#[tracing::instrument(skip(state), fields(user_id = %auth.user_id, video_id = %id, operation = "get_video"))]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state
        .videos
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    let video = with_signed_video_url(
        state.objects.as_ref(),
        state.config.signed_url_ttl(),
        video,
    )
    .await?;

    Ok(Json(VideoResponse::from(video)))
}

/// List the caller's records, each with a freshly signed URL.
#[tracing::instrument(skip(state), fields(user_id = %auth.user_id, operation = "list_videos"))]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
) -> Result<impl IntoResponse, HttpAppError> {
    let videos = state.videos.list_by_owner(auth.user_id).await?;

    let mut responses = Vec::with_capacity(videos.len());
    for video in videos {
        let video = with_signed_video_url(
            state.objects.as_ref(),
            state.config.signed_url_ttl(),
            video,
        )
        .await?;
        responses.push(VideoResponse::from(video));
    }

    Ok(Json(responses))
}
