use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{NewPoolAnswer, PoolAnswer};
use crate::database::repository::PoolAnswerStore;
use crate::types::{DomainError, DomainResult, Pagination, RecordId};

pub struct PgPoolAnswerStore {
    pool: PgPool,
}

impl PgPoolAnswerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoolAnswerStore for PgPoolAnswerStore {
    async fn create(&self, pool_answer: NewPoolAnswer) -> DomainResult<PoolAnswer> {
        let created = sqlx::query_as::<_, PoolAnswer>(
            "INSERT INTO pool_answer_ (user_id_, form_id_) VALUES ($1, $2)
             RETURNING id_, user_id_, form_id_",
        )
        .bind(pool_answer.user_id)
        .bind(pool_answer.form_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<PoolAnswer> {
        let pool_answer = sqlx::query_as::<_, PoolAnswer>(
            "SELECT id_, user_id_, form_id_ FROM pool_answer_ WHERE id_ = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(pool_answer)
    }

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<PoolAnswer>> {
        let (limit, offset) = page.as_sql();

        let pool_answers = sqlx::query_as::<_, PoolAnswer>(
            "SELECT id_, user_id_, form_id_ FROM pool_answer_
             WHERE form_id_ = $1 ORDER BY id_ LIMIT $2 OFFSET $3",
        )
        .bind(form_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(pool_answers)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pool_answer_ WHERE id_ = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContentNotFound);
        }

        Ok(())
    }
}
