//! Object storage abstraction trait

use async_trait::async_trait;
use reelvault_core::AppError;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UploadFailed(msg) => AppError::Storage(msg),
            StorageError::SignFailed(msg) => AppError::Storage(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::IoError(err) => AppError::Io(err),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        }
    }
}

/// Remote object-store seam for the ingestion pipeline and read paths.
///
/// The bucket is an explicit parameter on both operations because stored
/// references carry their own bucket; signing must honor the decoded
/// bucket, not whatever the service is currently configured with.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Stream a local file to `bucket`/`key` with the given content type.
    ///
    /// There is no rollback: once this succeeds the object stays in the
    /// store even if the caller fails afterwards.
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> StorageResult<()>;

    /// Produce a time-bounded read URL for `bucket`/`key`.
    ///
    /// Signed URLs are derived values: recomputed on every call, never
    /// cached, never persisted.
    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;
}
