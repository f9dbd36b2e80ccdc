use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{
    Answer, Form, FormUpdate, NewAnswer, NewForm, NewPoolAnswer, NewQuestion, NewUser, PoolAnswer,
    Question, QuestionUpdate, User,
};
use crate::database::stores::{PgAnswerStore, PgFormStore, PgPoolAnswerStore, PgQuestionStore, PgUserStore};
use crate::types::{DomainError, DomainResult, Pagination, RecordId};

/// SQLSTATE raised when the database role lacks privileges for a statement
pub const PERMISSION_DENIED: &str = "42501";
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DomainError::ContentNotFound,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(PERMISSION_DENIED) => DomainError::Forbidden,
                Some(UNIQUE_VIOLATION) => DomainError::Conflict,
                Some(FOREIGN_KEY_VIOLATION) => DomainError::InvalidContent,
                _ => {
                    tracing::error!("Database error: {}", err);
                    DomainError::Storage(err.to_string())
                }
            },
            _ => {
                tracing::error!("SQLx error: {}", err);
                DomainError::Storage(err.to_string())
            }
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    /// `ContentNotFound` when no user has this login
    async fn get_by_login(&self, login: &str) -> DomainResult<User>;

    async fn get_by_id(&self, id: RecordId) -> DomainResult<User>;
}

#[async_trait]
pub trait FormStore: Send + Sync {
    async fn create(&self, form: NewForm) -> DomainResult<Form>;

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Form>;

    /// Empty vec when the user owns nothing in the requested window
    async fn get_by_user_id(&self, user_id: RecordId, page: Pagination) -> DomainResult<Vec<Form>>;

    /// `ContentNotFound` when no row was updated
    async fn update(&self, update: FormUpdate) -> DomainResult<Form>;

    /// `ContentNotFound` when no row was deleted
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn create(&self, question: NewQuestion) -> DomainResult<Question>;

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Question>;

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<Question>>;

    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question>;

    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait PoolAnswerStore: Send + Sync {
    async fn create(&self, pool_answer: NewPoolAnswer) -> DomainResult<PoolAnswer>;

    async fn get_by_id(&self, id: RecordId) -> DomainResult<PoolAnswer>;

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<PoolAnswer>>;

    async fn delete(&self, id: RecordId) -> DomainResult<()>;
}

#[async_trait]
pub trait AnswerStore: Send + Sync {
    async fn create(&self, answer: NewAnswer) -> DomainResult<Answer>;

    async fn get_by_pool_answer_id(&self, pool_answer_id: RecordId, page: Pagination) -> DomainResult<Vec<Answer>>;
}

/// The five collections, each unaware of the others
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub forms: Arc<dyn FormStore>,
    pub questions: Arc<dyn QuestionStore>,
    pub pool_answers: Arc<dyn PoolAnswerStore>,
    pub answers: Arc<dyn AnswerStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            forms: Arc::new(PgFormStore::new(pool.clone())),
            questions: Arc::new(PgQuestionStore::new(pool.clone())),
            pool_answers: Arc::new(PgPoolAnswerStore::new(pool.clone())),
            answers: Arc::new(PgAnswerStore::new(pool)),
        }
    }
}
