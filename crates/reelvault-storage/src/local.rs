use crate::traits::{StorageError, StorageResult};
use reelvault_core::constants::ASSETS_PREFIX;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage for thumbnail assets.
///
/// Files land under a single flat directory and are served back under
/// `/assets/{filename}` by the HTTP layer.
#[derive(Clone)]
pub struct LocalAssets {
    root: PathBuf,
}

impl LocalAssets {
    /// Create the store, ensuring the root directory exists.
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();

        fs::create_dir_all(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create assets directory {}: {}",
                root.display(),
                e
            ))
        })?;

        Ok(LocalAssets { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an asset and return its public path (`/assets/{filename}`).
    ///
    /// Filenames are generated by the caller (uuid + extension); anything
    /// that could escape the root directory is rejected.
    pub async fn save(&self, filename: &str, data: &[u8]) -> StorageResult<String> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return Err(StorageError::InvalidKey(format!(
                "Invalid asset filename: {}",
                filename
            )));
        }

        let path = self.root.join(filename);
        let mut file = fs::File::create(&path).await?;
        file.write_all(data).await?;
        file.flush().await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = data.len(),
            "Asset saved"
        );

        Ok(format!("{}/{}", ASSETS_PREFIX, filename))
    }
}
