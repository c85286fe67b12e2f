//! Test harness: the full router over in-memory collaborators.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Duration;
use reelvault_api::auth::issue_token;
use reelvault_api::services::VideoIngestor;
use reelvault_api::setup::routes::build_router;
use reelvault_api::state::AppState;
use reelvault_core::models::Video;
use reelvault_core::{AppError, Config};
use reelvault_db::VideoStore;
use reelvault_processing::{
    FastStartRemuxer, MediaProber, ProbeOutput, ProbeStream, ProcessingError,
};
use reelvault_storage::{LocalAssets, ObjectStorage, StorageResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;
use tempfile::TempDir;
use uuid::Uuid;

pub const JWT_SECRET: &str = "integration-test-secret-0123456789";
pub const TEST_BUCKET: &str = "test-bucket";

pub struct InMemoryVideos {
    records: Mutex<HashMap<Uuid, Video>>,
}

#[async_trait]
impl VideoStore for InMemoryVideos {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|v| v.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create(&self, video: &Video) -> Result<(), AppError> {
        self.records.lock().unwrap().insert(video.id, video.clone());
        Ok(())
    }

    async fn update(&self, video: &Video) -> Result<(), AppError> {
        self.records.lock().unwrap().insert(video.id, video.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.records
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("video not found".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingObjects {
    pub uploads: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl ObjectStorage for RecordingObjects {
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        _path: &Path,
        content_type: &str,
    ) -> StorageResult<()> {
        self.uploads.lock().unwrap().push((
            bucket.to_string(),
            key.to_string(),
            content_type.to_string(),
        ));
        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: StdDuration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://cdn.test/{}/{}?expires={}",
            bucket,
            key,
            expires_in.as_secs()
        ))
    }
}

struct FixedProber;

#[async_trait]
impl MediaProber for FixedProber {
    async fn probe(&self, _path: &Path) -> Result<ProbeOutput, ProcessingError> {
        Ok(ProbeOutput {
            streams: vec![ProbeStream {
                width: 1920,
                height: 1080,
            }],
        })
    }
}

struct CopyRemuxer;

#[async_trait]
impl FastStartRemuxer for CopyRemuxer {
    async fn remux(&self, path: &Path) -> Result<PathBuf, ProcessingError> {
        let output = reelvault_processing::remux::processed_path(path);
        tokio::fs::copy(path, &output).await?;
        Ok(output)
    }
}

struct FailingRemuxer;

#[async_trait]
impl FastStartRemuxer for FailingRemuxer {
    async fn remux(&self, _path: &Path) -> Result<PathBuf, ProcessingError> {
        Err(ProcessingError::RemuxFailed("exit status 1".to_string()))
    }
}

/// Test application with handles to the fakes behind the router.
pub struct TestApp {
    pub server: TestServer,
    pub videos: Arc<InMemoryVideos>,
    pub objects: Arc<RecordingObjects>,
    spool_dir: TempDir,
    assets_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn bearer_for(&self, user_id: Uuid) -> String {
        let token = issue_token(JWT_SECRET, user_id, Duration::hours(1)).unwrap();
        format!("Bearer {}", token)
    }

    pub async fn seed_video(&self, owner_id: Uuid) -> Video {
        let video = Video::new_draft(owner_id, "seeded clip".to_string(), None);
        self.videos.create(&video).await.unwrap();
        video
    }

    pub fn spool_entries(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.spool_dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    pub fn assets_path(&self) -> &Path {
        self.assets_dir.path()
    }
}

fn test_config(assets_root: &Path, spool_dir: &Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec![],
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        jwt_secret: JWT_SECRET.to_string(),
        assets_root: assets_root.to_path_buf(),
        s3_bucket: TEST_BUCKET.to_string(),
        s3_region: "us-east-1".to_string(),
        s3_endpoint: None,
        signed_url_ttl_hours: 12,
        ffprobe_path: "ffprobe".to_string(),
        ffmpeg_path: "ffmpeg".to_string(),
        spool_dir: spool_dir.to_path_buf(),
        max_video_size_bytes: 1 << 30,
        max_thumbnail_size_bytes: 10 << 20,
    }
}

async fn setup_with_remuxer(remuxer: Arc<dyn FastStartRemuxer>) -> TestApp {
    let spool_dir = TempDir::new().unwrap();
    let assets_dir = TempDir::new().unwrap();
    let config = test_config(assets_dir.path(), spool_dir.path());

    let videos = Arc::new(InMemoryVideos {
        records: Mutex::new(HashMap::new()),
    });
    let objects = Arc::new(RecordingObjects::default());
    let assets = LocalAssets::new(assets_dir.path()).await.unwrap();

    let videos_dyn: Arc<dyn VideoStore> = videos.clone();
    let objects_dyn: Arc<dyn ObjectStorage> = objects.clone();

    let ingestor = VideoIngestor::new(
        videos_dyn.clone(),
        objects_dyn.clone(),
        Arc::new(FixedProber),
        remuxer,
        config.s3_bucket.clone(),
        config.spool_dir.clone(),
    );

    let state = Arc::new(AppState {
        config,
        videos: videos_dyn,
        objects: objects_dyn,
        assets,
        ingestor,
    });

    let router = build_router(state).unwrap();
    let server = TestServer::new(router).unwrap();

    TestApp {
        server,
        videos,
        objects,
        spool_dir,
        assets_dir,
    }
}

/// Router over in-memory collaborators; probe reports 1920x1080.
pub async fn setup_test_app() -> TestApp {
    setup_with_remuxer(Arc::new(CopyRemuxer)).await
}

/// Same as [`setup_test_app`] but the remux step always fails.
pub async fn setup_failing_remux_app() -> TestApp {
    setup_with_remuxer(Arc::new(FailingRemuxer)).await
}
