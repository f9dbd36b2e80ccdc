// handlers/protected/questions.rs - Question handlers
//
// POST   /api/v1/forms/:formid/questions              owner only
// GET    /api/v1/forms/:formid/questions              any caller
// PUT    /api/v1/forms/:formid/questions/:questionid  owner only
// DELETE /api/v1/forms/:formid/questions/:questionid  owner of the question's form

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::database::models::Question;
use crate::handlers::utils::PageQuery;
use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub form_id: String,
    pub header: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            form_id: question.form_id.to_string(),
            header: question.header,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub header: String,
}

pub async fn question_post(
    State(state): State<AppState>,
    identity: Identity,
    Path(form_id): Path<String>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> ApiResult<QuestionResponse> {
    let Json(body) = payload?;

    let question = state
        .services
        .questions
        .create(&identity, &form_id, body.header)
        .await?;

    Ok(ApiResponse::created(question.into()))
}

pub async fn question_list(
    State(state): State<AppState>,
    Path(form_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Vec<QuestionResponse>> {
    let page = query.resolve(state.max_page_limit)?;

    let questions = state.services.questions.list_by_form(&form_id, page).await?;

    Ok(ApiResponse::success(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

pub async fn question_put(
    State(state): State<AppState>,
    identity: Identity,
    Path((form_id, question_id)): Path<(String, String)>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> ApiResult<QuestionResponse> {
    let Json(body) = payload?;

    let question = state
        .services
        .questions
        .update(&identity, &form_id, &question_id, body.header)
        .await?;

    Ok(ApiResponse::success(question.into()))
}

/// The form segment is not trusted here; the question's stored form decides.
pub async fn question_delete(
    State(state): State<AppState>,
    identity: Identity,
    Path((_form_id, question_id)): Path<(String, String)>,
) -> ApiResult<()> {
    state.services.questions.delete(&identity, &question_id).await?;
    Ok(ApiResponse::<()>::no_content())
}
