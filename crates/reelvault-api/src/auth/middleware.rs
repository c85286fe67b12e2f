use crate::auth::jwt::validate_token;
use crate::auth::models::AuthContext;
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use reelvault_core::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    jwt_secret: String,
}

impl AuthState {
    pub fn new(jwt_secret: String) -> Self {
        AuthState { jwt_secret }
    }
}

/// Require a valid bearer token and stash the principal in request
/// extensions for the [`AuthContext`] extractor.
pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    let token = match auth_header.strip_prefix("Bearer ") {
        Some(token) => token,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Invalid authorization header format".to_string(),
            ))
            .into_response();
        }
    };

    let claims = match validate_token(token, &auth_state.jwt_secret) {
        Ok(claims) => claims,
        Err(err) => return HttpAppError(err).into_response(),
    };

    request.extensions_mut().insert(AuthContext {
        user_id: claims.sub,
    });

    next.run(request).await
}
