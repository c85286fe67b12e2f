use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use reelvault_core::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Delete a record. Owner-only. Any objects the record referenced stay in
/// the store; there is no reaping.
#[tracing::instrument(skip(state), fields(user_id = %auth.user_id, video_id = %id, operation = "delete_video"))]
pub async fn delete_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state
        .videos
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.owner_id != auth.user_id {
        return Err(AppError::Forbidden("User does not own the video".to_string()).into());
    }

    state.videos.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
