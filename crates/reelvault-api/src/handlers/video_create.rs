use crate::auth::AuthContext;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use reelvault_core::models::{CreateVideoRequest, Video, VideoResponse};
use reelvault_core::AppError;
use std::sync::Arc;

/// Create a draft video record with no media attached yet.
#[tracing::instrument(skip(state, request), fields(user_id = %auth.user_id, operation = "create_video"))]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    Json(request): Json<CreateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = Video::new_draft(auth.user_id, title.to_string(), request.description);
    state.videos.create(&video).await?;

    tracing::info!(video_id = %video.id, "Video record created");

    Ok((StatusCode::CREATED, Json(VideoResponse::from(video))))
}
