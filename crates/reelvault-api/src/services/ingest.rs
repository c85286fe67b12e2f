//! Video ingestion pipeline: buffer → probe → classify → remux → upload →
//! persist reference.
//!
//! Processing is strictly sequential and terminal on first failure; there
//! is no retry and no rollback of completed side effects. In particular,
//! an upload that succeeds before a failing record update leaves an
//! unreferenced object in the store (see DESIGN.md).

use bytes::Bytes;
use chrono::Utc;
use futures::{Stream, StreamExt};
use reelvault_core::constants::VIDEO_MP4;
use reelvault_core::models::Video;
use reelvault_core::AppError;
use reelvault_db::VideoStore;
use reelvault_processing::{AspectCategory, FastStartRemuxer, MediaProber};
use reelvault_storage::{ObjectStorage, StoreReference};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempPath};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::utils::media_essence;

/// Orchestrates a single video upload against injected collaborators.
#[derive(Clone)]
pub struct VideoIngestor {
    videos: Arc<dyn VideoStore>,
    objects: Arc<dyn ObjectStorage>,
    prober: Arc<dyn MediaProber>,
    remuxer: Arc<dyn FastStartRemuxer>,
    bucket: String,
    spool_dir: PathBuf,
}

impl VideoIngestor {
    pub fn new(
        videos: Arc<dyn VideoStore>,
        objects: Arc<dyn ObjectStorage>,
        prober: Arc<dyn MediaProber>,
        remuxer: Arc<dyn FastStartRemuxer>,
        bucket: String,
        spool_dir: PathBuf,
    ) -> Self {
        VideoIngestor {
            videos,
            objects,
            prober,
            remuxer,
            bucket,
            spool_dir,
        }
    }

    /// Run the full pipeline for one upload and return the updated record.
    ///
    /// `body` is the raw bytes of the multipart `video` field;
    /// `content_type` is the field's declared media type. The body is
    /// buffered to a local spool file before any processing because the
    /// remux tool needs random access over a complete file.
    #[tracing::instrument(skip(self, body), fields(video_id = %video_id, owner_id = %owner_id))]
    pub async fn ingest<S>(
        &self,
        owner_id: Uuid,
        video_id: Uuid,
        content_type: &str,
        body: S,
    ) -> Result<Video, AppError>
    where
        S: Stream<Item = Result<Bytes, AppError>> + Send,
    {
        let mut video = self
            .videos
            .get(video_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

        if video.owner_id != owner_id {
            return Err(AppError::Forbidden(
                "User does not own the video".to_string(),
            ));
        }

        let media_type = media_essence(content_type);
        if media_type != VIDEO_MP4 {
            return Err(AppError::InvalidInput(format!(
                "Media type is not '{}' but '{}'",
                VIDEO_MP4, media_type
            )));
        }

        tracing::info!("Ingesting video upload");

        // Spool file and remux output are dropped (and so deleted) on
        // every exit path below, including errors.
        let spooled = self.spool(body).await?;

        let probe = self.prober.probe(spooled.path()).await?;
        let category = AspectCategory::from_probe(&probe);

        let processed = self.remuxer.remux(spooled.path()).await?;
        let processed = TempPath::from_path(processed);

        let key = format!("{}/{}.mp4", category, video_id);
        self.objects
            .upload_file(&self.bucket, &key, &processed, VIDEO_MP4)
            .await?;

        video.video_ref = Some(StoreReference::new(&self.bucket, &key).encode());
        video.updated_at = Utc::now();
        self.videos.update(&video).await?;

        tracing::info!(category = %category, key = %key, "Video ingested");

        Ok(video)
    }

    /// Buffer the upload stream fully to a new spool file.
    async fn spool<S>(&self, body: S) -> Result<NamedTempFile, AppError>
    where
        S: Stream<Item = Result<Bytes, AppError>> + Send,
    {
        let spooled = tempfile::Builder::new()
            .prefix("reelvault-upload-")
            .suffix(".mp4")
            .tempfile_in(&self.spool_dir)?;

        let handle = spooled.as_file().try_clone()?;
        let mut file = tokio::fs::File::from_std(handle);

        let mut body = std::pin::pin!(body);
        while let Some(chunk) = body.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        Ok(spooled)
    }
}
