//! Route configuration and setup

use crate::auth::{auth_middleware, AuthState};
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, MethodRouter},
    Router,
};
use reelvault_core::constants::{API_PREFIX, ASSETS_PREFIX};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Setup all application routes.
///
/// Everything under `/api` requires a bearer token; the health probe and
/// thumbnail assets are public.
pub fn build_router(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(&state)?;
    let auth_state = Arc::new(AuthState::new(state.config.jwt_secret.clone()));

    let api = Router::new()
        .route(
            "/videos",
            post(handlers::create_video).get(handlers::list_videos),
        )
        .route(
            "/videos/{id}",
            get(handlers::get_video).delete(handlers::delete_video),
        )
        .route("/videos/{id}/video", {
            let mr: MethodRouter<_> = post(handlers::upload_video)
                .layer(DefaultBodyLimit::max(state.config.max_video_size_bytes));
            mr.layer(RequestBodyLimitLayer::new(state.config.max_video_size_bytes))
        })
        .route("/videos/{id}/thumbnail", {
            let mr: MethodRouter<_> = post(handlers::upload_thumbnail)
                .layer(DefaultBodyLimit::max(state.config.max_thumbnail_size_bytes));
            mr.layer(RequestBodyLimitLayer::new(
                state.config.max_thumbnail_size_bytes,
            ))
        })
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    let router = Router::new()
        .route("/healthz", get(handlers::health))
        .nest_service(ASSETS_PREFIX, ServeDir::new(state.assets.root()))
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

fn setup_cors(state: &AppState) -> Result<CorsLayer, anyhow::Error> {
    if state.config.cors_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = state
        .config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
