//! Stream-metadata probing via ffprobe.

use crate::error::ProcessingError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Parsed probe output: the container's streams in declaration order.
///
/// An empty stream list is not an error; it means the dimensions are
/// unknown and classification falls back to `other`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
}

impl ProbeOutput {
    /// Dimensions of the primary stream, if any.
    pub fn primary_dimensions(&self) -> Option<(i64, i64)> {
        self.streams.first().map(|s| (s.width, s.height))
    }
}

/// Inspect a local media file for stream metadata.
#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<ProbeOutput, ProcessingError>;
}

/// `MediaProber` backed by the ffprobe binary.
pub struct FfprobeProber {
    ffprobe_path: String,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: impl Into<String>) -> Self {
        FfprobeProber {
            ffprobe_path: ffprobe_path.into(),
        }
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn probe(&self, path: &Path) -> Result<ProbeOutput, ProcessingError> {
        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A dropped request future must not leave ffprobe running.
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                ProcessingError::ProbeFailed(format!("failed to run {}: {}", self.ffprobe_path, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProcessingError::ProbeFailed(format!(
                "{} exited with {}: {}",
                self.ffprobe_path,
                output.status,
                stderr.trim()
            )));
        }

        let probe: ProbeOutput = serde_json::from_slice(&output.stdout)?;

        tracing::debug!(
            streams = probe.streams.len(),
            dimensions = ?probe.primary_dimensions(),
            "Probe completed"
        );

        Ok(probe)
    }
}
