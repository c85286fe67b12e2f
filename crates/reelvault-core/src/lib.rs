//! Reelvault core library
//!
//! Domain models, the unified error type, and configuration shared by the
//! other Reelvault crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, LogLevel};
