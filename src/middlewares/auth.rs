use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{types::app_state::AppState, utils::app_error::AppError};

/// Requires the `authorization` header to equal `AUTH_KEY` when one is configured.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(auth_key) = state.auth_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    match headers.get(AUTHORIZATION) {
        Some(header) if header == auth_key => Ok(next.run(request).await),
        _ => Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized")),
    }
}
