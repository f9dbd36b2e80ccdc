// handlers/protected/users.rs - GET /api/v1/users/:id handler

use axum::extract::{Path, State};
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub login: String,
}

pub async fn user_get(State(state): State<AppState>, Path(user_id): Path<String>) -> ApiResult<UserResponse> {
    let user = state.services.auth.get_user(&user_id).await?;
    Ok(ApiResponse::success(UserResponse { login: user.login }))
}
