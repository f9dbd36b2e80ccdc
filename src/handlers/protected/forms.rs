// handlers/protected/forms.rs - Form handlers
//
// POST   /api/v1/forms          create, owned by the caller
// GET    /api/v1/forms          the caller's own forms
// GET    /api/v1/forms/:formid  any form
// PATCH  /api/v1/forms/:formid  owner only
// DELETE /api/v1/forms/:formid  owner only

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::database::models::Form;
use crate::handlers::utils::PageQuery;
use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;
use crate::services::FormPatch;

#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
}

impl From<Form> for FormResponse {
    fn from(form: Form) -> Self {
        Self {
            id: form.id.to_string(),
            user_id: form.user_id.to_string(),
            title: form.title,
            description: form.description,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFormRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Any owner id in the body is ignored; ownership comes from the token.
#[derive(Debug, Deserialize)]
pub struct UpdateFormRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn form_post(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<CreateFormRequest>, JsonRejection>,
) -> ApiResult<FormResponse> {
    let Json(body) = payload?;

    let form = state
        .services
        .forms
        .create(&identity, body.title, body.description)
        .await?;

    Ok(ApiResponse::created(form.into()))
}

pub async fn form_list(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<PageQuery>,
) -> ApiResult<Vec<FormResponse>> {
    let page = query.resolve(state.max_page_limit)?;

    let forms = state.services.forms.list_own(&identity, page).await?;

    Ok(ApiResponse::success(forms.into_iter().map(FormResponse::from).collect()))
}

pub async fn form_get(State(state): State<AppState>, Path(form_id): Path<String>) -> ApiResult<FormResponse> {
    let form = state.services.forms.get_by_id(&form_id).await?;
    Ok(ApiResponse::success(form.into()))
}

pub async fn form_patch(
    State(state): State<AppState>,
    identity: Identity,
    Path(form_id): Path<String>,
    payload: Result<Json<UpdateFormRequest>, JsonRejection>,
) -> ApiResult<FormResponse> {
    let Json(body) = payload?;

    let patch = FormPatch {
        title: body.title,
        description: body.description,
    };
    let form = state.services.forms.update(&identity, &form_id, patch).await?;

    Ok(ApiResponse::success(form.into()))
}

pub async fn form_delete(
    State(state): State<AppState>,
    identity: Identity,
    Path(form_id): Path<String>,
) -> ApiResult<()> {
    state.services.forms.delete(&identity, &form_id).await?;
    Ok(ApiResponse::<()>::no_content())
}
