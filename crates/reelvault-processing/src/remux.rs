//! Fast-start container remuxing via ffmpeg.
//!
//! Rewrites an mp4 so its index atoms sit at the front of the file,
//! letting playback begin before the whole file has downloaded. Streams
//! are copied, never re-encoded.

use crate::error::ProcessingError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Suffix appended to the input path for the remuxed output file.
const PROCESSING_SUFFIX: &str = ".processing";

/// Derive the output path for a given input path.
pub fn processed_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(PROCESSING_SUFFIX);
    PathBuf::from(path)
}

/// Rewrite a local video file for progressive-start streaming.
///
/// Returns the path of the new file; the caller owns cleanup of both the
/// input and the output.
#[async_trait]
pub trait FastStartRemuxer: Send + Sync {
    async fn remux(&self, path: &Path) -> Result<PathBuf, ProcessingError>;
}

/// `FastStartRemuxer` backed by the ffmpeg binary.
pub struct FfmpegRemuxer {
    ffmpeg_path: String,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: impl Into<String>) -> Self {
        FfmpegRemuxer {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }
}

#[async_trait]
impl FastStartRemuxer for FfmpegRemuxer {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn remux(&self, path: &Path) -> Result<PathBuf, ProcessingError> {
        let output_path = processed_path(path);

        let output = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(path)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output_path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            // A dropped request future must not leave ffmpeg running.
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ProcessingError::RemuxFailed(format!("failed to run {}: {}", self.ffmpeg_path, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProcessingError::RemuxFailed(format!(
                "{} exited with {}: {}",
                self.ffmpeg_path,
                output.status,
                stderr.trim()
            )));
        }

        tracing::debug!(output = %output_path.display(), "Remux completed");

        Ok(output_path)
    }
}
