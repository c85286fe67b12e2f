//! Shared constants.

/// Route prefix for the JSON API.
pub const API_PREFIX: &str = "/api";

/// Public path prefix under which thumbnail assets are served.
pub const ASSETS_PREFIX: &str = "/assets";

/// The only media type accepted for video uploads.
pub const VIDEO_MP4: &str = "video/mp4";

/// Upper bound for a video upload body.
pub const MAX_VIDEO_UPLOAD_BYTES: usize = 1 << 30; // 1 GiB

/// Upper bound for a thumbnail upload body.
pub const MAX_THUMBNAIL_UPLOAD_BYTES: usize = 10 << 20; // 10 MiB

/// Default validity window for signed read URLs, in hours.
pub const DEFAULT_SIGNED_URL_TTL_HOURS: u64 = 12;
