//! Bearer token authentication middleware

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use pvz::DomainError;

use crate::app::AppState;
use crate::errors::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Validates the bearer token and injects the acting `pvz::Actor`
/// into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| DomainError::Unauthenticated("missing Authorization header".into()))?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| DomainError::Unauthenticated("expected Bearer scheme".into()))?;

    let actor = state.auth_service.authenticate(token.trim())?;

    request.extensions_mut().insert(actor);

    Ok(next.run(request).await)
}
