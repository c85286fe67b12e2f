//! Video record persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reelvault_core::models::Video;
use reelvault_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Metadata-store seam for video records.
///
/// The ingestion pipeline and handlers depend on this trait rather than
/// the concrete repository, so tests can substitute an in-memory store.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError>;
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError>;
    async fn create(&self, video: &Video) -> Result<(), AppError>;
    /// Persist the full record. Concurrent updates for the same id race;
    /// the last successful write wins.
    async fn update(&self, video: &Video) -> Result<(), AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    thumbnail_ref: Option<String>,
    video_ref: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<VideoRow> for Video {
    fn from(row: VideoRow) -> Self {
        Video {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description,
            thumbnail_ref: row.thumbnail_ref,
            video_ref: row.video_ref,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Postgres-backed `VideoStore`.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        VideoRepository { pool }
    }
}

#[async_trait]
impl VideoStore for VideoRepository {
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn get(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let row: Option<VideoRow> =
            sqlx::query_as::<Postgres, VideoRow>("SELECT * FROM videos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Video::from))
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Video>, AppError> {
        let rows: Vec<VideoRow> = sqlx::query_as::<Postgres, VideoRow>(
            "SELECT * FROM videos WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    #[tracing::instrument(skip(self, video), fields(db.table = "videos", db.operation = "insert", video_id = %video.id))]
    async fn create(&self, video: &Video) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO videos (id, owner_id, title, description, thumbnail_ref, video_ref, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(video.id)
        .bind(video.owner_id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_ref)
        .bind(&video.video_ref)
        .bind(video.created_at)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self, video), fields(db.table = "videos", db.operation = "update", video_id = %video.id))]
    async fn update(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE videos SET title = $2, description = $3, thumbnail_ref = $4, video_ref = $5, updated_at = $6 \
             WHERE id = $1",
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_ref)
        .bind(&video.video_ref)
        .bind(video.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("video not found".to_string()));
        }

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "delete"))]
    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("video not found".to_string()));
        }

        Ok(())
    }
}
