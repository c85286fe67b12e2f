//! Configuration module
//!
//! Configuration is read once from the environment at startup (a `.env`
//! file is honored when present) and injected into the application state;
//! nothing reads ambient environment state at request time.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_SIGNED_URL_TTL_HOURS, MAX_THUMBNAIL_UPLOAD_BYTES, MAX_VIDEO_UPLOAD_BYTES,
};

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_ASSETS_ROOT: &str = "./assets";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    // Local asset storage (thumbnails)
    pub assets_root: PathBuf,
    // Object storage (videos)
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>,
    pub signed_url_ttl_hours: u64,
    // Ingestion pipeline
    pub ffprobe_path: String,
    pub ffmpeg_path: String,
    pub spool_dir: PathBuf,
    pub max_video_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            jwt_secret: require_env("JWT_SECRET")?,
            assets_root: PathBuf::from(
                env::var("ASSETS_ROOT").unwrap_or_else(|_| DEFAULT_ASSETS_ROOT.to_string()),
            ),
            s3_bucket: require_env("S3_BUCKET")?,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
            signed_url_ttl_hours: parse_env("SIGNED_URL_TTL_HOURS", DEFAULT_SIGNED_URL_TTL_HOURS)?,
            ffprobe_path: env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            spool_dir: env::var("SPOOL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
            max_video_size_bytes: parse_env("MAX_VIDEO_SIZE_BYTES", MAX_VIDEO_UPLOAD_BYTES)?,
            max_thumbnail_size_bytes: parse_env(
                "MAX_THUMBNAIL_SIZE_BYTES",
                MAX_THUMBNAIL_UPLOAD_BYTES,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Sanity-check values that would otherwise fail at first use.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 16 {
            anyhow::bail!("JWT_SECRET must be at least 16 characters");
        }
        if self.s3_bucket.is_empty() {
            anyhow::bail!("S3_BUCKET must not be empty");
        }
        if self.signed_url_ttl_hours == 0 {
            anyhow::bail!("SIGNED_URL_TTL_HOURS must be greater than zero");
        }
        if self.max_video_size_bytes == 0 {
            anyhow::bail!("MAX_VIDEO_SIZE_BYTES must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn signed_url_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.signed_url_ttl_hours * 3600)
    }
}

fn require_env(name: &str) -> Result<String, anyhow::Error> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} must be set", name))
}

fn parse_env<T>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
