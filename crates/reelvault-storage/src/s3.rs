use crate::traits::{ObjectStorage, StorageError, StorageResult};
use async_trait::async_trait;
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::buffered::BufWriter;
use object_store::path::Path as ObjectPath;
use object_store::signer::Signer;
use object_store::{Attribute, Attributes, ObjectStore};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name for uploads
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let store = build_store(&bucket, &region, endpoint_url.as_deref())?;
        Ok(S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        })
    }

    /// Store handle for the given bucket. Stored references carry their
    /// own bucket, which may differ from the configured upload bucket.
    fn store_for(&self, bucket: &str) -> StorageResult<AmazonS3> {
        if bucket == self.bucket {
            Ok(self.store.clone())
        } else {
            build_store(bucket, &self.region, self.endpoint_url.as_deref())
        }
    }
}

fn build_store(bucket: &str, region: &str, endpoint_url: Option<&str>) -> StorageResult<AmazonS3> {
    // Credentials come from the environment; bucket/region/endpoint are explicit.
    let mut builder = AmazonS3Builder::from_env()
        .with_region(region.to_string())
        .with_bucket_name(bucket.to_string());

    if let Some(endpoint) = endpoint_url {
        let allow_http = endpoint.starts_with("http://");
        builder = builder
            .with_endpoint(endpoint.to_string())
            .with_allow_http(allow_http);
    }

    builder
        .build()
        .map_err(|e| StorageError::ConfigError(e.to_string()))
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> StorageResult<()> {
        let store = self.store_for(bucket)?;
        let location = ObjectPath::from(key.to_string());
        let start = std::time::Instant::now();

        let mut file = tokio::fs::File::open(path).await?;
        let size = file.metadata().await?.len();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());

        let store: Arc<dyn ObjectStore> = Arc::new(store);
        let mut writer =
            BufWriter::new(store, location.clone()).with_attributes(attributes);

        let result: Result<(), std::io::Error> = async {
            tokio::io::copy(&mut file, &mut writer).await?;
            writer.shutdown().await?;
            Ok(())
        }
        .await;

        if let Err(e) = result {
            tracing::error!(
                error = %e,
                bucket = %bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            return Err(StorageError::UploadFailed(e.to_string()));
        }

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    async fn presign_get(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        let store = self.store_for(bucket)?;
        let location = ObjectPath::from(key.to_string());

        let url = store
            .signed_url(Method::GET, &location, expires_in)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    "S3 presign failed"
                );
                StorageError::SignFailed(e.to_string())
            })?;

        Ok(url.to_string())
    }
}
