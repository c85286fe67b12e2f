use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video record. The record exists before any media is attached; uploads
/// only ever set `thumbnail_ref` / `video_ref` and bump `updated_at`.
///
/// `video_ref` holds a compound object-store reference (`bucket,key`), not
/// a fetchable URL; read paths exchange it for a signed URL before it
/// leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_ref: Option<String>,
    pub video_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Create a draft record with no media attached.
    pub fn new_draft(owner_id: Uuid, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            thumbnail_ref: None,
            video_ref: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request body for creating a draft record.
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wire shape of a video record.
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            owner_id: video.owner_id,
            title: video.title,
            description: video.description,
            thumbnail_url: video.thumbnail_ref,
            video_url: video.video_ref,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
