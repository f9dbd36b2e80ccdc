use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{Answer, NewAnswer};
use crate::database::repository::AnswerStore;
use crate::types::{DomainResult, Pagination, RecordId};

pub struct PgAnswerStore {
    pool: PgPool,
}

impl PgAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerStore for PgAnswerStore {
    async fn create(&self, answer: NewAnswer) -> DomainResult<Answer> {
        let created = sqlx::query_as::<_, Answer>(
            "INSERT INTO answer_ (question_id_, pool_answer_id_, value_) VALUES ($1, $2, $3)
             RETURNING id_, question_id_, pool_answer_id_, value_",
        )
        .bind(answer.question_id)
        .bind(answer.pool_answer_id)
        .bind(&answer.value)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_pool_answer_id(&self, pool_answer_id: RecordId, page: Pagination) -> DomainResult<Vec<Answer>> {
        let (limit, offset) = page.as_sql();

        let answers = sqlx::query_as::<_, Answer>(
            "SELECT id_, question_id_, pool_answer_id_, value_ FROM answer_
             WHERE pool_answer_id_ = $1 ORDER BY id_ LIMIT $2 OFFSET $3",
        )
        .bind(pool_answer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }
}
