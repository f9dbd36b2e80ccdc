// handlers/public/auth/signin.rs - POST /api/v1/auth/signin handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use super::Credentials;
use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
}

pub async fn signin_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<SignInResponse> {
    let Json(credentials) = payload?;

    let token = state
        .services
        .auth
        .sign_in(&credentials.login, &credentials.password)
        .await?;

    tracing::info!("User '{}' signed in", credentials.login.trim());

    Ok(ApiResponse::success(SignInResponse { token }))
}
