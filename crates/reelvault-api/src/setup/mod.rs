//! Application setup: collaborators, routes, server.

pub mod routes;
pub mod server;

use crate::services::VideoIngestor;
use crate::state::AppState;
use axum::Router;
use reelvault_core::Config;
use reelvault_db::{VideoRepository, VideoStore};
use reelvault_processing::{FastStartRemuxer, FfmpegRemuxer, FfprobeProber, MediaProber};
use reelvault_storage::{LocalAssets, ObjectStorage, S3Storage};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Connect collaborators, run migrations, and build the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    reelvault_db::run_migrations(&pool).await?;

    let videos: Arc<dyn VideoStore> = Arc::new(VideoRepository::new(pool));
    let objects: Arc<dyn ObjectStorage> = Arc::new(S3Storage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        config.s3_endpoint.clone(),
    )?);
    let assets = LocalAssets::new(config.assets_root.clone()).await?;
    let prober: Arc<dyn MediaProber> = Arc::new(FfprobeProber::new(config.ffprobe_path.clone()));
    let remuxer: Arc<dyn FastStartRemuxer> =
        Arc::new(FfmpegRemuxer::new(config.ffmpeg_path.clone()));

    let ingestor = VideoIngestor::new(
        videos.clone(),
        objects.clone(),
        prober,
        remuxer,
        config.s3_bucket.clone(),
        config.spool_dir.clone(),
    );

    let state = Arc::new(AppState {
        config,
        videos,
        objects,
        assets,
        ingestor,
    });

    let router = routes::build_router(state.clone())?;

    Ok((state, router))
}
