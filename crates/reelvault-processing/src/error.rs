//! Media processing errors.

use reelvault_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The probe tool exited non-zero.
    #[error("Probe failed: {0}")]
    ProbeFailed(String),

    /// The probe tool produced output we could not parse.
    #[error("Unreadable probe output: {0}")]
    ProbeOutput(#[from] serde_json::Error),

    /// The remux tool exited non-zero.
    #[error("Remux failed: {0}")]
    RemuxFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ProcessingError> for AppError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::ProbeFailed(msg) => AppError::Probe(msg),
            ProcessingError::ProbeOutput(err) => AppError::Probe(err.to_string()),
            ProcessingError::RemuxFailed(msg) => AppError::Remux(msg),
            ProcessingError::Io(err) => AppError::Io(err),
        }
    }
}
