use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::domain::{session::SessionStore, todo::UserId};
use crate::http::types::ApiError;

/// Authenticated identity attached to the request by the session guard.
/// Handlers behind the guard may assume this extension is present.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub UserId);

/// Session guard: resolves the bearer token to a user and attaches it, or
/// halts the request with an unauthorized response.
pub async fn session_guard(
    State(sessions): State<Arc<dyn SessionStore>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    let user = sessions
        .resolve(token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(axum::http::header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
