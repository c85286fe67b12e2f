//! Error types module
//!
//! All errors surface through the `AppError` enum, which can represent
//! database, storage, media-processing, and request-validation failures.
//! Each variant carries enough metadata to render a consistent HTTP
//! response (status code, machine-readable code, log level).
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the
//! `sqlx` feature so leaf crates without a database can depend on this
//! crate without pulling sqlx in.

use std::io;

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors such as validation failures
    Debug,
    /// Recoverable issues worth surfacing
    Warn,
    /// Unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Object storage error: {0}")]
    Storage(String),

    #[error("Media probe failed: {0}")]
    Probe(String),

    #[error("Fast-start remux failed: {0}")]
    Remux(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

impl AppError {
    /// HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::Unauthorized(_) => 401,
            AppError::Forbidden(_) => 403,
            AppError::NotFound(_) => 404,
            AppError::PayloadTooLarge(_) => 413,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Probe(_)
            | AppError::Remux(_)
            | AppError::Io(_)
            | AppError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Probe(_) => "PROBE_ERROR",
            AppError::Remux(_) => "REMUX_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Log level at which this error should be reported.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_)
            | AppError::NotFound(_)
            | AppError::Unauthorized(_)
            | AppError::Forbidden(_)
            | AppError::PayloadTooLarge(_) => LogLevel::Debug,
            AppError::Probe(_) | AppError::Remux(_) => LogLevel::Warn,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::Io(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }

    /// Variant name, for structured log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::Probe(_) => "Probe",
            AppError::Remux(_) => "Remux",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Forbidden(_) => "Forbidden",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Io(_) => "Io",
            AppError::Internal(_) => "Internal",
        }
    }
}
