//! Small helpers shared by upload handlers.

/// Normalize a MIME type by stripping parameters
/// (e.g. "video/mp4; codecs=avc1" -> "video/mp4").
pub fn media_essence(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .unwrap_or(content_type)
}

/// File extension for an image content type; `None` for anything the
/// thumbnail store does not accept.
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    match media_essence(content_type).to_ascii_lowercase().as_str() {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}
