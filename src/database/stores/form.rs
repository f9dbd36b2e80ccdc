use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::{Form, FormUpdate, NewForm};
use crate::database::repository::FormStore;
use crate::types::{DomainError, DomainResult, Pagination, RecordId};

pub struct PgFormStore {
    pool: PgPool,
}

impl PgFormStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FormStore for PgFormStore {
    async fn create(&self, form: NewForm) -> DomainResult<Form> {
        let created = sqlx::query_as::<_, Form>(
            "INSERT INTO form_ (user_id_, title_, description_) VALUES ($1, $2, $3)
             RETURNING id_, user_id_, title_, description_",
        )
        .bind(form.user_id)
        .bind(&form.title)
        .bind(&form.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Form> {
        let form = sqlx::query_as::<_, Form>(
            "SELECT id_, user_id_, title_, description_ FROM form_ WHERE id_ = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(form)
    }

    async fn get_by_user_id(&self, user_id: RecordId, page: Pagination) -> DomainResult<Vec<Form>> {
        let (limit, offset) = page.as_sql();

        let forms = sqlx::query_as::<_, Form>(
            "SELECT id_, user_id_, title_, description_ FROM form_
             WHERE user_id_ = $1 ORDER BY id_ LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(forms)
    }

    async fn update(&self, update: FormUpdate) -> DomainResult<Form> {
        let updated = sqlx::query_as::<_, Form>(
            "UPDATE form_ SET
                 user_id_ = $2,
                 title_ = COALESCE($3, title_),
                 description_ = COALESCE($4, description_)
             WHERE id_ = $1
             RETURNING id_, user_id_, title_, description_",
        )
        .bind(update.id)
        .bind(update.user_id)
        .bind(update.title.as_deref())
        .bind(update.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(DomainError::ContentNotFound)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM form_ WHERE id_ = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ContentNotFound);
        }

        Ok(())
    }
}
