// handlers/public/auth/signup.rs - POST /api/v1/auth/signup handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use super::Credentials;
use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub id: String,
    pub login: String,
}

/// Create an account. 409 when the login is taken.
pub async fn signup_post(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<SignUpResponse> {
    let Json(credentials) = payload?;

    let user = state
        .services
        .auth
        .sign_up(&credentials.login, &credentials.password)
        .await?;

    Ok(ApiResponse::created(SignUpResponse {
        id: user.id.to_string(),
        login: user.login,
    }))
}
