use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{NewQuestion, Question, QuestionUpdate};
use crate::database::repository::QuestionStore;
use crate::types::{DomainError, DomainResult, Pagination, RecordId};

pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn create(&self, question: NewQuestion) -> DomainResult<Question> {
        let created = sqlx::query_as::<_, Question>(
            "INSERT INTO question_ (form_id_, header_) VALUES ($1, $2)
             RETURNING id_, form_id_, header_",
        )
        .bind(question.form_id)
        .bind(&question.header)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id_, form_id_, header_ FROM question_ WHERE id_ = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<Question>> {
        let (limit, offset) = page.as_sql();

        let questions = sqlx::query_as::<_, Question>(
            "SELECT id_, form_id_, header_ FROM question_
             WHERE form_id_ = $1 ORDER BY id_ LIMIT $2 OFFSET $3",
        )
        .bind(form_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question> {
        // The form id stays part of the predicate so a question cannot be
        // edited through a form it does not belong to.
        let updated = sqlx::query_as::<_, Question>(
            "UPDATE question_ SET header_ = $3
             WHERE id_ = $1 AND form_id_ = $2
             RETURNING id_, form_id_, header_",
        )
        .bind(update.id)
        .bind(update.form_id)
        .bind(&update.header)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(DomainError::ContentNotFound)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM question_ WHERE id_ = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContentNotFound);
        }

        Ok(())
    }
}
