//! Compound store references.
//!
//! A stored video reference is the literal string `"bucket,key"`. Keeping
//! the bucket and key instead of a URL lets read paths re-sign access with
//! a fresh expiry on every request.

/// A decoded `(bucket, key)` object-store location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReference {
    bucket: String,
    key: String,
}

impl StoreReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        StoreReference {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Serialize as the persisted `bucket,key` form.
    pub fn encode(&self) -> String {
        format!("{},{}", self.bucket, self.key)
    }

    /// Decode a persisted reference. Splits on the first comma; anything
    /// without two non-empty components is treated as absent rather than
    /// an error, so malformed references degrade to "no URL available".
    pub fn parse(raw: &str) -> Option<Self> {
        let (bucket, key) = raw.split_once(',')?;
        if bucket.is_empty() || key.is_empty() {
            return None;
        }
        Some(StoreReference::new(bucket, key))
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
