//! Reelvault storage library
//!
//! Storage backends and reference handling:
//!
//! - [`ObjectStorage`]: the remote object-store seam (put-object and
//!   presigned GET), implemented by [`S3Storage`].
//! - [`LocalAssets`]: thumbnail files on the local filesystem, served
//!   under `/assets`.
//! - [`StoreReference`]: the compound `bucket,key` reference persisted in
//!   video records. Records never store fetchable URLs; readers decode the
//!   reference and sign a fresh URL per request.

pub mod local;
pub mod reference;
pub mod s3;
pub mod traits;

pub use local::LocalAssets;
pub use reference::StoreReference;
pub use s3::S3Storage;
pub use traits::{ObjectStorage, StorageError, StorageResult};
