// handlers/protected/pool_answers.rs - Submission and response handlers
//
// POST /api/v1/forms/:formid/poolsanswer                 submit as the caller
// GET  /api/v1/forms/:formid/poolsanswer                 owner only
// GET  /api/v1/forms/:formid/poolsanswer/:poolanswerid   owner only, with answers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::database::models::{Answer, AnswerInput, PoolAnswer};
use crate::handlers::utils::PageQuery;
use crate::middleware::{ApiResponse, ApiResult};
use crate::router::AppState;
use crate::types::{parse_id, DomainError};

#[derive(Debug, Serialize)]
pub struct PoolAnswerResponse {
    pub id: String,
    pub user_id: String,
    pub form_id: String,
}

impl From<PoolAnswer> for PoolAnswerResponse {
    fn from(pool_answer: PoolAnswer) -> Self {
        Self {
            id: pool_answer.id.to_string(),
            user_id: pool_answer.user_id.to_string(),
            form_id: pool_answer.form_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub id: String,
    pub question_id: String,
    pub pool_answer_id: String,
    pub value: String,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id.to_string(),
            question_id: answer.question_id.to_string(),
            pool_answer_id: answer.pool_answer_id.to_string(),
            value: answer.value,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PoolAnswerWithAnswers {
    pub pool_answer: PoolAnswerResponse,
    pub answers: Vec<AnswerResponse>,
}

impl PoolAnswerWithAnswers {
    fn new(pool_answer: PoolAnswer, answers: Vec<Answer>) -> Self {
        Self {
            pool_answer: pool_answer.into(),
            answers: answers.into_iter().map(AnswerResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub answers: Vec<AnswerRequest>,
}

pub async fn pool_answer_post(
    State(state): State<AppState>,
    identity: Identity,
    Path(form_id): Path<String>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> ApiResult<PoolAnswerWithAnswers> {
    let Json(body) = payload?;

    let answers = body
        .answers
        .into_iter()
        .map(|answer| {
            Ok(AnswerInput {
                question_id: parse_id(&answer.question_id)?,
                value: answer.value,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let submission = state
        .services
        .pool_answers
        .submit(&identity, &form_id, answers)
        .await?;

    Ok(ApiResponse::created(PoolAnswerWithAnswers::new(
        submission.pool_answer,
        submission.answers,
    )))
}

pub async fn pool_answer_list(
    State(state): State<AppState>,
    identity: Identity,
    Path(form_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Vec<PoolAnswerResponse>> {
    let page = query.resolve(state.max_page_limit)?;

    let pool_answers = state
        .services
        .pool_answers
        .list_by_form(&identity, &form_id, page)
        .await?;

    Ok(ApiResponse::success(
        pool_answers.into_iter().map(PoolAnswerResponse::from).collect(),
    ))
}

/// `limit`/`offset` page through the answers
pub async fn pool_answer_get(
    State(state): State<AppState>,
    identity: Identity,
    Path((form_id, pool_answer_id)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> ApiResult<PoolAnswerWithAnswers> {
    let page = query.resolve(state.max_page_limit)?;

    let (pool_answer, answers) = state
        .services
        .answers
        .list_for_pool_answer(&identity, Some(&form_id), &pool_answer_id, page)
        .await?;

    Ok(ApiResponse::success(PoolAnswerWithAnswers::new(pool_answer, answers)))
}
