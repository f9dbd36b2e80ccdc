use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::convert::Infallible;

use crate::auth::{Identity, Principal};
use crate::error::ApiError;
use crate::router::AppState;

/// Bearer-token gate for the protected tier. Resolves the token to a
/// `Principal` and attaches it to the request.
pub async fn bearer_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).map_err(ApiError::unauthorized)?;

    let principal = state.services.auth.authenticate(&token).await?;
    tracing::debug!("Authenticated user {} ({})", principal.user_id, principal.login);

    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    match auth_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        Some(_) => Err("Empty bearer token".to_string()),
        None => Err("Authorization header must use Bearer token format".to_string()),
    }
}

/// The caller's identity as decided by the gate. Never rejects; routes
/// outside the gate simply see `Identity::Anonymous`.
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Identity::from(parts.extensions.get::<Principal>().cloned()))
    }
}
