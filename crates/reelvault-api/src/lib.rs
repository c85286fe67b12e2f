//! Reelvault API library
//!
//! HTTP surface for the video service: auth middleware, upload and read
//! handlers, the ingestion orchestrator, and application setup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
