//! Application state.
//!
//! Collaborators are injected at construction (explicit DI); handlers
//! never reach for ambient configuration or globals.

use crate::services::VideoIngestor;
use reelvault_core::Config;
use reelvault_db::VideoStore;
use reelvault_storage::{LocalAssets, ObjectStorage};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoStore>,
    pub objects: Arc<dyn ObjectStorage>,
    pub assets: LocalAssets,
    pub ingestor: VideoIngestor,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
