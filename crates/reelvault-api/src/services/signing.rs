//! Signed-URL resolution for read paths.

use reelvault_core::models::Video;
use reelvault_core::AppError;
use reelvault_storage::{ObjectStorage, StoreReference};
use std::time::Duration;

/// Swap a record's stored compound reference for a fresh signed URL.
///
/// Records with no reference, or with one that does not decode, pass
/// through unmodified; a missing URL is a degraded read, not an error.
/// The URL is recomputed on every call and never cached.
pub async fn with_signed_video_url(
    objects: &dyn ObjectStorage,
    ttl: Duration,
    mut video: Video,
) -> Result<Video, AppError> {
    let Some(reference) = video.video_ref.as_deref().and_then(StoreReference::parse) else {
        return Ok(video);
    };

    let url = objects
        .presign_get(reference.bucket(), reference.key(), ttl)
        .await?;

    video.video_ref = Some(url);
    Ok(video)
}
