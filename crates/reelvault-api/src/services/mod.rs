pub mod ingest;
pub mod signing;

pub use ingest::VideoIngestor;
pub use signing::with_signed_video_url;
